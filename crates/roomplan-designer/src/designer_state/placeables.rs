//! Placeable and room editing, clipboard.

use roomplan_core::units::parse_length;
use roomplan_core::ValidationError;

use super::DesignerState;
use crate::model::{Color, Placeable, PlaceableId, PlaceableKind, Rotation};
use crate::scene::{FurnitureSpec, OpeningSpec};

impl DesignerState {
    pub fn add_furniture(&mut self, spec: FurnitureSpec) -> Result<PlaceableId, ValidationError> {
        let id = self.scene.add_furniture(spec)?;
        self.sync_selection();
        self.mark_modified();
        Ok(id)
    }

    /// Adds furniture from form text, read in the configured furniture unit.
    pub fn add_furniture_from_input(
        &mut self,
        name: &str,
        width: &str,
        depth: &str,
        color: Color,
    ) -> Result<PlaceableId, ValidationError> {
        let unit = self.config.units.furniture_unit;
        let spec = FurnitureSpec::new(parse_length(width, unit)?, parse_length(depth, unit)?)
            .named(name)
            .with_color(color);
        self.add_furniture(spec)
    }

    pub fn add_door(&mut self, spec: OpeningSpec) -> Result<PlaceableId, ValidationError> {
        let id = self.scene.add_door(spec)?;
        self.sync_selection();
        self.mark_modified();
        Ok(id)
    }

    pub fn add_window(&mut self, spec: OpeningSpec) -> Result<PlaceableId, ValidationError> {
        let id = self.scene.add_window(spec)?;
        self.sync_selection();
        self.mark_modified();
        Ok(id)
    }

    /// Removes a placeable; unknown ids are a no-op.
    pub fn remove(&mut self, id: &PlaceableId) -> Option<Placeable> {
        let removed = self.scene.remove(id);
        self.sync_selection();
        if removed.is_some() {
            self.mark_modified();
        }
        removed
    }

    pub fn update<F>(&mut self, id: &PlaceableId, mutation: F) -> bool
    where
        F: FnOnce(&mut Placeable),
    {
        let changed = self.scene.update(id, mutation);
        if changed {
            self.selection.reconcile(&self.scene);
            self.mark_modified();
        }
        changed
    }

    pub fn resize_room(&mut self, width: f64, depth: f64) -> Result<(), ValidationError> {
        self.scene.resize_room(width, depth)?;
        self.sync_selection();
        self.mark_modified();
        Ok(())
    }

    /// Resizes the room from form text, read in the configured room unit.
    pub fn resize_room_from_input(&mut self, width: &str, depth: &str) -> Result<(), ValidationError> {
        let unit = self.config.units.room_unit;
        let width = parse_length(width, unit)?;
        let depth = parse_length(depth, unit)?;
        self.resize_room(width, depth)
    }

    pub fn set_room_name(&mut self, name: impl Into<String>) {
        self.scene.set_room_name(name);
        self.mark_modified();
    }

    pub fn toggle_room_border(&mut self) -> bool {
        let show = !self.scene.room().show_border;
        self.scene.set_show_border(show);
        self.mark_modified();
        show
    }

    pub fn set_floor_texture(&mut self, texture: impl Into<String>) {
        self.scene.set_floor_texture(texture);
        self.mark_modified();
    }

    /// Selects a placeable (e.g. from the list view).
    pub fn select(&mut self, id: &PlaceableId) -> bool {
        self.sync_affordance_radius();
        self.selection.select(&self.scene, id)
    }

    pub fn deselect(&mut self) {
        self.selection.deselect(&self.scene);
    }

    pub fn rotate(&mut self, id: &PlaceableId) -> Option<Rotation> {
        let rotation = self.selection.rotate(&mut self.scene, id);
        if rotation.is_some() {
            self.mark_modified();
        }
        rotation
    }

    pub fn rotate_selected(&mut self) -> Option<Rotation> {
        let id = self.selected_id()?.clone();
        self.rotate(&id)
    }

    pub fn delete_selected(&mut self) -> bool {
        let deleted = self.selection.delete_selected(&mut self.scene);
        self.sync_selection();
        if deleted {
            self.mark_modified();
        }
        deleted
    }

    pub fn toggle_door(&mut self, id: &PlaceableId) -> Option<bool> {
        let state = self.selection.toggle_door(&mut self.scene, id);
        if state.is_some() {
            self.mark_modified();
        }
        state
    }

    /// Copies the selected placeable to the clipboard.
    pub fn copy_selected(&mut self) -> bool {
        let Some(placeable) = self
            .selection
            .selected_id()
            .and_then(|id| self.scene.get(id))
        else {
            return false;
        };
        self.clipboard.copy(placeable);
        true
    }

    /// Inserts the clipboard content with a fresh id, shifted by the paste
    /// offset, and selects it. Each paste steps one offset further than the
    /// previous one.
    ///
    /// Furniture copies are named "<name> (Copy)"; doors and windows get the
    /// next automatic name.
    pub fn paste(&mut self) -> Option<PlaceableId> {
        let mut copy = self.clipboard.paste()?;
        let offset = self.config.placement.paste_offset_m;

        copy.id = PlaceableId::generate();
        copy.name = match copy.kind() {
            PlaceableKind::Furniture => format!("{} (Copy)", copy.name),
            kind => self.scene.next_auto_name(kind),
        };
        copy.translate(offset, offset);

        let id = match self.scene.insert(copy) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("Paste rejected: {}", err);
                return None;
            }
        };
        self.clipboard.shift(offset, offset);
        self.sync_selection();
        self.selection.select(&self.scene, &id);
        self.mark_modified();
        Some(id)
    }

    /// Copy then paste the selected placeable.
    pub fn duplicate_selected(&mut self) -> Option<PlaceableId> {
        if !self.copy_selected() {
            return None;
        }
        self.paste()
    }
}
