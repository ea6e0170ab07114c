//! Designer state manager for UI integration.
//! Owns the scene and everything that edits it, and handles UI callbacks.
//!
//! This module is split into submodules:
//! - `placeables`: add/remove/rotate, clipboard and room actions
//! - `pointer`: pointer events in screen pixels
//! - `file_io`: Save/load operations

mod file_io;
mod placeables;
mod pointer;

use chrono::{DateTime, Utc};
use roomplan_core::constants::DRAG_THRESHOLD_PX;
use roomplan_settings::EditorConfig;
use std::path::PathBuf;

use crate::adapters::{ListViewAdapter, RenderAdapter, UnitSource};
use crate::clipboard::Clipboard;
use crate::model::PlaceableId;
use crate::renderer::{list_entries, RenderFrame};
use crate::scene::Scene;
use crate::selection_manager::{InteractionSettings, SelectionManager, AFFORDANCE_RADIUS_PX};
use crate::viewport::Viewport;

/// Discrete editor commands (menu items, shortcuts, toolbar buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Rotate,
    Delete,
    Copy,
    Paste,
    Duplicate,
    ToggleDoor,
    ToggleBorder,
    ZoomIn,
    ZoomOut,
    FitRoom,
    NewRoom,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    scene: Scene,
    selection: SelectionManager,
    clipboard: Clipboard,
    viewport: Viewport,
    config: EditorConfig,
    created: DateTime<Utc>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl DesignerState {
    /// Creates a designer with the default room.
    pub fn new(config: EditorConfig) -> Self {
        let viewport = Viewport::default().with_scale(
            config.view.pixels_per_metre,
            config.view.min_zoom,
            config.view.max_zoom,
        );
        Self {
            scene: Scene::default(),
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            viewport,
            config,
            created: Utc::now(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&PlaceableId> {
        self.selection.selected_id()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.config.grid.snap_enabled = enabled;
    }

    pub fn set_lock_to_room(&mut self, locked: bool) {
        self.config.placement.lock_to_room = locked;
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.config.grid.show_grid = show;
    }

    /// Interaction parameters with pixel sizes converted through the view.
    pub fn interaction_settings(&self) -> InteractionSettings {
        InteractionSettings {
            snap_enabled: self.config.grid.snap_enabled,
            grid_cell: self.config.grid.cell_size_m,
            lock_to_room: self.config.placement.lock_to_room,
            drag_threshold: self.viewport.pixels_to_metres(DRAG_THRESHOLD_PX),
            affordance_radius: self.viewport.pixels_to_metres(AFFORDANCE_RADIUS_PX),
        }
    }

    /// Forwards pending scene events to the selection so it never refers
    /// to a placeable that is gone.
    fn sync_selection(&mut self) {
        for event in self.scene.drain_events() {
            self.selection.on_scene_event(&self.scene, &event);
        }
    }

    fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.sync_affordance_radius();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.sync_affordance_radius();
    }

    /// Zooms and pans so the whole room is visible.
    pub fn fit_room(&mut self) {
        let bounds = self.scene.room().bounds();
        self.viewport.fit_to_view(&bounds);
        self.sync_affordance_radius();
    }

    /// Keeps affordance anchors a constant screen distance from the corners.
    pub(crate) fn sync_affordance_radius(&mut self) {
        let radius = self.viewport.pixels_to_metres(AFFORDANCE_RADIUS_PX);
        self.selection.set_affordance_radius(&self.scene, radius);
    }

    pub fn render_frame(&self) -> RenderFrame<'_> {
        let grid_cell = self
            .config
            .grid
            .show_grid
            .then_some(self.config.grid.cell_size_m);
        RenderFrame::build(&self.scene, &self.selection, &self.viewport, grid_cell)
    }

    pub fn render<R: RenderAdapter>(&self, adapter: &mut R) {
        adapter.draw(&self.render_frame());
    }

    pub fn refresh_list<L: ListViewAdapter, U: UnitSource>(&self, list: &mut L, units: &U) {
        list.show(&list_entries(&self.scene, units.current_unit()));
    }

    /// Runs an editor command; returns true when something changed.
    pub fn handle_action(&mut self, action: EditorAction) -> bool {
        tracing::debug!("Editor action {:?}", action);
        match action {
            EditorAction::Rotate => self.rotate_selected().is_some(),
            EditorAction::Delete => self.delete_selected(),
            EditorAction::Copy => self.copy_selected(),
            EditorAction::Paste => self.paste().is_some(),
            EditorAction::Duplicate => self.duplicate_selected().is_some(),
            EditorAction::ToggleDoor => match self.selected_id().cloned() {
                Some(id) => self.toggle_door(&id).is_some(),
                None => false,
            },
            EditorAction::ToggleBorder => {
                self.toggle_room_border();
                true
            }
            EditorAction::ZoomIn => {
                self.zoom_in();
                true
            }
            EditorAction::ZoomOut => {
                self.zoom_out();
                true
            }
            EditorAction::FitRoom => {
                self.fit_room();
                true
            }
            EditorAction::NewRoom => {
                self.new_room();
                true
            }
        }
    }
}
