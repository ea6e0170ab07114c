//! Render and list-view data for the scene.
//!
//! Nothing here draws pixels. A [`RenderFrame`] bundles everything a
//! drawing backend needs for one repaint, and [`list_entries`] produces the
//! side-panel rows.
//!
//! Features:
//! - Grid lines clipped to the room
//! - Door swing arcs that follow the door's rotation
//! - Floor fill resolved through a texture collaborator with a flat fallback

use roomplan_core::units::{format_dimension, LengthUnit};

use crate::adapters::TextureResolver;
use crate::model::{
    Color, FloorTexture, Placeable, PlaceableDetails, PlaceableId, PlaceableKind, Point, Room,
};
use crate::scene::Scene;
use crate::selection_manager::{Affordance, SelectionManager};
use crate::snap::{grid_lines, GridLine};
use crate::viewport::Viewport;

/// Angular step of the door swing polygon, in degrees.
const ARC_STEP_DEG: u32 = 5;

/// Swing arc polygon of an open door.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorArc {
    pub door: PlaceableId,
    pub points: Vec<Point>,
}

/// Floor paint: a resolved drawable or the catalogue's flat color.
#[derive(Debug, Clone, PartialEq)]
pub enum FloorFill<D> {
    Texture(D),
    Solid(Color),
}

/// Everything needed to repaint the canvas once.
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    pub room: &'a Room,
    /// Back to front.
    pub placeables: &'a [Placeable],
    pub selected: Option<&'a PlaceableId>,
    pub affordances: &'a [Affordance],
    pub viewport: &'a Viewport,
    pub grid: Vec<GridLine>,
    pub door_arcs: Vec<DoorArc>,
}

impl<'a> RenderFrame<'a> {
    /// Builds a frame; `grid_cell` is `None` when the grid is hidden.
    pub fn build(
        scene: &'a Scene,
        selection: &'a SelectionManager,
        viewport: &'a Viewport,
        grid_cell: Option<f64>,
    ) -> Self {
        let grid = grid_cell
            .map(|cell| grid_lines(scene.room(), cell))
            .unwrap_or_default();
        let door_arcs = scene
            .iter()
            .filter(|p| p.is_open() == Some(true))
            .map(|door| DoorArc {
                door: door.id.clone(),
                points: door_swing_arc(door),
            })
            .collect();

        Self {
            room: scene.room(),
            placeables: scene.placeables(),
            selected: selection.selected_id(),
            affordances: selection.affordances(),
            viewport,
            grid,
            door_arcs,
        }
    }

    pub fn is_selected(&self, placeable: &Placeable) -> bool {
        self.selected == Some(&placeable.id)
    }

    /// Resolves the floor paint, falling back to the catalogue color.
    pub fn floor_fill<R: TextureResolver>(&self, resolver: &R) -> FloorFill<R::Drawable> {
        let texture = self.room.floor_texture();
        if texture == FloorTexture::None {
            return FloorFill::Solid(texture.base_color());
        }
        match resolver.resolve(&self.room.texture) {
            Some(drawable) => FloorFill::Texture(drawable),
            None => FloorFill::Solid(texture.base_color()),
        }
    }
}

/// Quarter-circle swing polygon of a door, radius equal to the door width.
///
/// The hinge is the top-left corner of the unrotated door and the polygon
/// is turned with the door about its centre. Returns an empty polygon for
/// anything that is not a door.
pub fn door_swing_arc(placeable: &Placeable) -> Vec<Point> {
    if !matches!(placeable.details, PlaceableDetails::Door { .. }) {
        return Vec::new();
    }

    let (width, height) = placeable.base_dimensions();
    let center = placeable.center();
    let to_room = |lx: f64, ly: f64| {
        let (dx, dy) = placeable.rotation.apply(lx - width / 2.0, ly - height / 2.0);
        Point::new(center.x + dx, center.y + dy)
    };

    let mut points = vec![to_room(0.0, 0.0)];
    for step in 0..=(90 / ARC_STEP_DEG) {
        let angle = f64::from(step * ARC_STEP_DEG).to_radians();
        points.push(to_room(width * angle.cos(), width * angle.sin()));
    }
    points.push(to_room(0.0, 0.0));
    points
}

/// Side-panel row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: PlaceableId,
    pub kind: PlaceableKind,
    pub text: String,
}

/// Formats one row, e.g. `Sofa – 2.00 m × 0.90 m (90°)`.
pub fn list_entry_text(placeable: &Placeable, unit: LengthUnit) -> String {
    let rotation = if placeable.rotation.degrees() != 0 {
        format!(" ({})", placeable.rotation)
    } else {
        String::new()
    };
    format!(
        "{} – {} × {}{}",
        placeable.name,
        format_dimension(placeable.width, unit),
        format_dimension(placeable.height, unit),
        rotation
    )
}

/// Rows for every placeable in list order.
pub fn list_entries(scene: &Scene, unit: LengthUnit) -> Vec<ListEntry> {
    scene
        .iter()
        .map(|p| ListEntry {
            id: p.id.clone(),
            kind: p.kind(),
            text: list_entry_text(p, unit),
        })
        .collect()
}
