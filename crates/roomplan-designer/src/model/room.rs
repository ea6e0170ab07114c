use roomplan_core::constants::{DEFAULT_ROOM_DEPTH_M, DEFAULT_ROOM_NAME, DEFAULT_ROOM_WIDTH_M};
use roomplan_core::ValidationError;
use std::fmt;

use super::{Bounds, Color};

/// Built-in floor finishes. The room stores the identifier string so that
/// unknown ids from newer files survive a load/save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloorTexture {
    #[default]
    None,
    Hardwood,
    Carpet,
    Tile,
    Concrete,
}

impl FloorTexture {
    pub const ALL: [FloorTexture; 5] = [
        FloorTexture::None,
        FloorTexture::Hardwood,
        FloorTexture::Carpet,
        FloorTexture::Tile,
        FloorTexture::Concrete,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FloorTexture::None => "None",
            FloorTexture::Hardwood => "Hardwood",
            FloorTexture::Carpet => "Carpet",
            FloorTexture::Tile => "Tile",
            FloorTexture::Concrete => "Concrete",
        }
    }

    /// Flat fill used when no texture drawable is available.
    pub fn base_color(&self) -> Color {
        match self {
            FloorTexture::None => Color::rgb(0xfa, 0xfa, 0xfa),
            FloorTexture::Hardwood => Color::rgb(0xd2, 0xb4, 0x8c),
            FloorTexture::Carpet => Color::rgb(0xdd, 0xa0, 0xdd),
            FloorTexture::Tile => Color::rgb(0xf0, 0xf8, 0xff),
            FloorTexture::Concrete => Color::rgb(0xc0, 0xc0, 0xc0),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|texture| texture.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for FloorTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The single rectangular room of a scene, anchored at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    width: f64,
    depth: f64,
    pub show_border: bool,
    pub texture: String,
}

impl Room {
    /// Creates a room; both sides must be finite and positive.
    pub fn new(width: f64, depth: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: DEFAULT_ROOM_NAME.to_string(),
            width: ValidationError::check_positive("room width", width)?,
            depth: ValidationError::check_positive("room depth", depth)?,
            show_border: true,
            texture: FloorTexture::None.id().to_string(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn resize(&mut self, width: f64, depth: f64) -> Result<(), ValidationError> {
        let width = ValidationError::check_positive("room width", width)?;
        let depth = ValidationError::check_positive("room depth", depth)?;
        self.width = width;
        self.depth = depth;
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.depth)
    }

    /// Catalogue entry for the stored texture id; unknown ids fall back to `None`.
    pub fn floor_texture(&self) -> FloorTexture {
        FloorTexture::from_id(&self.texture).unwrap_or_default()
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            name: DEFAULT_ROOM_NAME.to_string(),
            width: DEFAULT_ROOM_WIDTH_M,
            depth: DEFAULT_ROOM_DEPTH_M,
            show_border: true,
            texture: FloorTexture::None.id().to_string(),
        }
    }
}
