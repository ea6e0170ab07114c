//! Collaborator seams.
//!
//! The editor core reads its environment (display unit, zoom, texture
//! assets) and pushes its output (canvas repaints, list rows) through these
//! traits. Hosts implement them; the core never owns the other side.

use roomplan_core::units::LengthUnit;
use roomplan_settings::UnitSettings;

use crate::renderer::{ListEntry, RenderFrame};
use crate::viewport::Viewport;

/// Supplies the unit dimensions are displayed in.
pub trait UnitSource {
    fn current_unit(&self) -> LengthUnit;
}

/// Supplies the current zoom factor.
pub trait ZoomSource {
    fn current_zoom(&self) -> f64;
}

/// Maps a floor texture id to something drawable.
pub trait TextureResolver {
    type Drawable;

    /// `None` when no asset exists for the id; callers fall back to a flat fill.
    fn resolve(&self, texture_id: &str) -> Option<Self::Drawable>;
}

/// Draws a frame.
pub trait RenderAdapter {
    fn draw(&mut self, frame: &RenderFrame<'_>);
}

/// Shows the side-panel rows.
pub trait ListViewAdapter {
    fn show(&mut self, entries: &[ListEntry]);
}

impl UnitSource for LengthUnit {
    fn current_unit(&self) -> LengthUnit {
        *self
    }
}

/// Furniture dimensions are what the list view shows.
impl UnitSource for UnitSettings {
    fn current_unit(&self) -> LengthUnit {
        self.furniture_unit
    }
}

impl ZoomSource for Viewport {
    fn current_zoom(&self) -> f64 {
        self.zoom()
    }
}
