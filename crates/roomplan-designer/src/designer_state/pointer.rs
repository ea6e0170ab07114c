//! Pointer events in screen pixels.

use super::DesignerState;
use crate::model::PlaceableId;
use crate::selection_manager::PointerOutcome;

impl DesignerState {
    pub fn pointer_down(&mut self, pixel_x: f64, pixel_y: f64) -> PointerOutcome {
        let point = self.viewport.pixel_to_world(pixel_x, pixel_y);
        let settings = self.interaction_settings();
        let outcome = self
            .selection
            .pointer_down(&mut self.scene, point, &settings);
        self.sync_selection();
        if matches!(
            outcome,
            PointerOutcome::Deleted(_) | PointerOutcome::Rotated(..)
        ) {
            self.mark_modified();
        }
        outcome
    }

    /// Returns true when the dragged placeable moved.
    pub fn pointer_move(&mut self, pixel_x: f64, pixel_y: f64) -> bool {
        let point = self.viewport.pixel_to_world(pixel_x, pixel_y);
        let settings = self.interaction_settings();
        let moved = self
            .selection
            .pointer_move(&mut self.scene, point, &settings);
        if moved {
            self.mark_modified();
        }
        moved
    }

    /// Returns true when a drag ended.
    pub fn pointer_up(&mut self, pixel_x: f64, pixel_y: f64) -> bool {
        let point = self.viewport.pixel_to_world(pixel_x, pixel_y);
        let settings = self.interaction_settings();
        self.selection
            .pointer_up(&mut self.scene, point, &settings)
    }

    /// Toggles the door under the pointer.
    pub fn double_click(&mut self, pixel_x: f64, pixel_y: f64) -> Option<(PlaceableId, bool)> {
        let point = self.viewport.pixel_to_world(pixel_x, pixel_y);
        let toggled = self.selection.double_click(&mut self.scene, point);
        if toggled.is_some() {
            self.mark_modified();
        }
        toggled
    }
}
