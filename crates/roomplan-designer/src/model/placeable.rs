use roomplan_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Bounds, Color, Point};

/// Stable identifier of a placeable within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceableId(String);

impl PlaceableId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceableId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlaceableId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind tag, derived from [`PlaceableDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceableKind {
    Furniture,
    Door,
    Window,
}

impl PlaceableKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlaceableKind::Furniture => "Furniture",
            PlaceableKind::Door => "Door",
            PlaceableKind::Window => "Window",
        }
    }
}

impl fmt::Display for PlaceableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quarter-turn rotation about the footprint centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rotation(u16);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0);

    /// Normalizes any whole multiple of 90 (negative or above 360 included).
    pub fn from_degrees(degrees: f64) -> Result<Self, ValidationError> {
        if !degrees.is_finite() {
            return Err(ValidationError::InvalidRotation { degrees });
        }
        let quarters = degrees / 90.0;
        if (quarters - quarters.round()).abs() > 1e-6 {
            return Err(ValidationError::InvalidRotation { degrees });
        }
        let quarters = (quarters.round() as i64).rem_euclid(4) as u16;
        Ok(Self(quarters * 90))
    }

    pub fn degrees(&self) -> u16 {
        self.0
    }

    /// Next clockwise quarter turn.
    pub fn rotated_cw(&self) -> Rotation {
        Rotation((self.0 + 90) % 360)
    }

    /// True for 90 and 270, where the footprint's sides are swapped.
    pub fn is_quarter_turn(&self) -> bool {
        self.0 == 90 || self.0 == 270
    }

    /// Rotates `(dx, dy)` about the origin in screen orientation (y down).
    pub fn apply(&self, dx: f64, dy: f64) -> (f64, f64) {
        match self.0 {
            90 => (-dy, dx),
            180 => (-dx, -dy),
            270 => (dy, -dx),
            _ => (dx, dy),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceableDetails {
    Furniture { color: Color },
    Door { is_open: bool },
    Window,
}

impl PlaceableDetails {
    pub fn kind(&self) -> PlaceableKind {
        match self {
            PlaceableDetails::Furniture { .. } => PlaceableKind::Furniture,
            PlaceableDetails::Door { .. } => PlaceableKind::Door,
            PlaceableDetails::Window => PlaceableKind::Window,
        }
    }
}

/// A furniture item, door or window.
///
/// `position` is the top-left corner of the unrotated footprint and
/// `width`/`height` are the unrotated sizes. Rotation turns the footprint
/// about its centre, so the centre never moves when rotating.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeable {
    pub id: PlaceableId,
    pub name: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    pub details: PlaceableDetails,
}

impl Placeable {
    /// Builds a placeable with a fresh id after validating its geometry.
    pub fn new(
        name: impl Into<String>,
        position: Point,
        width: f64,
        height: f64,
        details: PlaceableDetails,
    ) -> Result<Self, ValidationError> {
        let placeable = Self {
            id: PlaceableId::generate(),
            name: name.into(),
            position,
            width,
            height,
            rotation: Rotation::ZERO,
            details,
        };
        placeable.validate()?;
        Ok(placeable)
    }

    pub fn with_id(mut self, id: PlaceableId) -> Self {
        self.id = id;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_positive("width", self.width)?;
        ValidationError::check_positive("height", self.height)?;
        ValidationError::check_finite("x", self.position.x)?;
        ValidationError::check_finite("y", self.position.y)?;
        Ok(())
    }

    pub fn kind(&self) -> PlaceableKind {
        self.details.kind()
    }

    /// Unrotated (width, height).
    pub fn base_dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// On-screen (width, height) after rotation.
    pub fn rotated_dimensions(&self) -> (f64, f64) {
        if self.rotation.is_quarter_turn() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    pub fn center(&self) -> Point {
        self.position.offset(self.width / 2.0, self.height / 2.0)
    }

    /// Axis-aligned footprint after rotation.
    pub fn footprint(&self) -> Bounds {
        let (w, h) = self.rotated_dimensions();
        Bounds::centered(self.center(), w, h)
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.footprint().contains(point, tolerance)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position = self.position.offset(dx, dy);
    }

    pub fn rotate_cw(&mut self) -> Rotation {
        self.rotation = self.rotation.rotated_cw();
        self.rotation
    }

    pub fn color(&self) -> Option<Color> {
        match self.details {
            PlaceableDetails::Furniture { color } => Some(color),
            _ => None,
        }
    }

    pub fn is_open(&self) -> Option<bool> {
        match self.details {
            PlaceableDetails::Door { is_open } => Some(is_open),
            _ => None,
        }
    }

    /// Flips a door's open flag; returns the new state, or `None` for other kinds.
    pub fn toggle_open(&mut self) -> Option<bool> {
        match &mut self.details {
            PlaceableDetails::Door { is_open } => {
                *is_open = !*is_open;
                Some(*is_open)
            }
            _ => None,
        }
    }
}
