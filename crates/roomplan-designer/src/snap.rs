//! Grid snapping and room-edge clamping.
//!
//! Snapping rounds to the nearest grid multiple and is applied only to
//! positions produced by dragging. The grid itself is derived from the room
//! on demand and is never stored in the scene.

use crate::model::{Placeable, Point, Room};

/// One grid line segment in room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub start: Point,
    pub end: Point,
}

/// Rounds `value` to the nearest multiple of `cell`.
pub fn snap_value(value: f64, cell: f64) -> f64 {
    if !(cell.is_finite() && cell > 0.0) {
        return value;
    }
    (value / cell).round() * cell
}

/// Snaps both coordinates to the nearest grid intersection.
pub fn snap(point: Point, cell: f64) -> Point {
    Point::new(snap_value(point.x, cell), snap_value(point.y, cell))
}

/// Snaps when `enabled`, otherwise returns the point unchanged.
pub fn snap_point(point: Point, enabled: bool, cell: f64) -> Point {
    if enabled {
        snap(point, cell)
    } else {
        point
    }
}

/// Grid lines covering the room: verticals first, then horizontals.
pub fn grid_lines(room: &Room, cell: f64) -> Vec<GridLine> {
    if !(cell.is_finite() && cell > 0.0) {
        return Vec::new();
    }

    let (width, depth) = (room.width(), room.depth());
    let columns = (width / cell + 1e-9).floor() as usize;
    let rows = (depth / cell + 1e-9).floor() as usize;
    let mut lines = Vec::with_capacity(columns + rows + 2);

    for i in 0..=columns {
        let x = i as f64 * cell;
        lines.push(GridLine {
            start: Point::new(x, 0.0),
            end: Point::new(x, depth),
        });
    }
    for j in 0..=rows {
        let y = j as f64 * cell;
        lines.push(GridLine {
            start: Point::new(0.0, y),
            end: Point::new(width, y),
        });
    }
    lines
}

/// Clamps a candidate `position` for `placeable` so its rotated footprint
/// stays inside the room. A footprint larger than the room is pinned to the
/// top-left wall.
pub fn clamp_to_room(position: Point, placeable: &Placeable, room: &Room) -> Point {
    let footprint = placeable.footprint();
    let offset = footprint.top_left() - placeable.position;
    let max_x = (room.width() - footprint.width()).max(0.0);
    let max_y = (room.depth() - footprint.height()).max(0.0);

    let left = (position.x + offset.x).clamp(0.0, max_x);
    let top = (position.y + offset.y).clamp(0.0, max_y);
    Point::new(left - offset.x, top - offset.y)
}
