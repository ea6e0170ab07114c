//! Serialization and deserialization for layout files.
//!
//! A layout is a JSON document holding the room and its placeables. Readers
//! are tolerant: optional fields fall back to defaults, unknown fields are
//! ignored, and documents written by the 0.4 releases (`width_m`/`depth_m`
//! room keys and a `furniture` array) still load. Anything that would put
//! invalid geometry into a scene is rejected and the caller's scene is left
//! as it was.

use chrono::{DateTime, Utc};
use roomplan_core::constants::DEFAULT_ROOM_NAME;
use roomplan_core::DocumentError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{
    Color, FloorTexture, Placeable, PlaceableDetails, PlaceableId, PlaceableKind, Point, Room,
    Rotation,
};
use crate::scene::Scene;

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: LayoutMetadata,
    pub room: RoomRecord,
    #[serde(default)]
    pub placeables: Vec<PlaceableRecord>,
    /// Furniture list of 0.4 documents; read only.
    #[serde(default, skip_serializing)]
    pub furniture: Vec<LegacyFurnitureRecord>,
}

/// Layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl Default for LayoutMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            created: now,
            modified: now,
        }
    }
}

/// Serialized room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    #[serde(default = "default_room_name")]
    pub name: String,
    #[serde(alias = "width_m")]
    pub width: f64,
    #[serde(alias = "depth_m")]
    pub depth: f64,
    #[serde(default = "default_true", alias = "show_border")]
    pub show_border: bool,
    #[serde(default = "default_texture", alias = "floor_texture")]
    pub texture: String,
}

/// Serialized placeable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceableRecord {
    pub kind: PlaceableKind,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

/// Furniture entry of a 0.4 document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyFurnitureRecord {
    #[serde(default)]
    pub name: String,
    pub width_m: f64,
    pub depth_m: f64,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub x_m: f64,
    #[serde(default)]
    pub y_m: f64,
    #[serde(default)]
    pub rotation: f64,
}

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

fn default_room_name() -> String {
    DEFAULT_ROOM_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_texture() -> String {
    FloorTexture::None.id().to_string()
}

impl RoomRecord {
    fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            width: room.width(),
            depth: room.depth(),
            show_border: room.show_border,
            texture: room.texture.clone(),
        }
    }

    fn into_room(self) -> Result<Room, DocumentError> {
        let mut room = Room::new(self.width, self.depth)?;
        room.name = self.name;
        room.show_border = self.show_border;
        room.texture = self.texture;
        Ok(room)
    }
}

impl PlaceableRecord {
    pub fn from_placeable(placeable: &Placeable) -> Self {
        let (color, is_open) = match placeable.details {
            PlaceableDetails::Furniture { color } => (Some(color.to_hex()), None),
            PlaceableDetails::Door { is_open } => (None, Some(is_open)),
            PlaceableDetails::Window => (None, None),
        };
        Self {
            kind: placeable.kind(),
            id: placeable.id.to_string(),
            name: placeable.name.clone(),
            x: placeable.position.x,
            y: placeable.position.y,
            width: placeable.width,
            height: placeable.height,
            rotation: f64::from(placeable.rotation.degrees()),
            color,
            is_open,
        }
    }

    pub fn into_placeable(self) -> Result<Placeable, DocumentError> {
        let details = match self.kind {
            PlaceableKind::Furniture => PlaceableDetails::Furniture {
                color: match self.color.as_deref() {
                    Some(hex) => Color::from_hex(hex)?,
                    None => Color::DEFAULT_FURNITURE,
                },
            },
            PlaceableKind::Door => PlaceableDetails::Door {
                is_open: self.is_open.unwrap_or(false),
            },
            PlaceableKind::Window => PlaceableDetails::Window,
        };

        let rotation = Rotation::from_degrees(self.rotation)?;
        let placeable = Placeable::new(
            self.name,
            Point::new(self.x, self.y),
            self.width,
            self.height,
            details,
        )?
        .with_rotation(rotation);

        Ok(if self.id.is_empty() {
            placeable
        } else {
            placeable.with_id(PlaceableId::from(self.id))
        })
    }
}

impl LegacyFurnitureRecord {
    fn into_placeable(self, index: usize) -> Result<Placeable, DocumentError> {
        let color = match self.colour.as_deref() {
            Some(hex) => Color::from_hex(hex)?,
            None => Color::DEFAULT_FURNITURE,
        };
        let name = if self.name.is_empty() {
            format!("Item {}", index + 1)
        } else {
            self.name
        };
        let placeable = Placeable::new(
            name,
            Point::new(self.x_m, self.y_m),
            self.width_m,
            self.depth_m,
            PlaceableDetails::Furniture { color },
        )?;
        Ok(placeable.with_rotation(Rotation::from_degrees(self.rotation)?))
    }
}

impl LayoutFile {
    /// Snapshot of a scene, stamped with the current time.
    pub fn from_scene(scene: &Scene) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: scene.room().name.clone(),
                created: now,
                modified: now,
            },
            room: RoomRecord::from_room(scene.room()),
            placeables: scene
                .placeables()
                .iter()
                .map(PlaceableRecord::from_placeable)
                .collect(),
            furniture: Vec::new(),
        }
    }

    /// Builds a fully validated scene; the first bad record aborts the load.
    pub fn into_scene(self) -> Result<Scene, DocumentError> {
        if self.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Layout version {} differs from {}, loading anyway",
                self.version,
                FILE_FORMAT_VERSION
            );
        }

        let room = self.room.into_room()?;
        let mut placeables = Vec::with_capacity(self.placeables.len() + self.furniture.len());
        for record in self.placeables {
            placeables.push(record.into_placeable()?);
        }
        let offset = placeables.len();
        for (index, record) in self.furniture.into_iter().enumerate() {
            placeables.push(record.into_placeable(offset + index)?);
        }

        Scene::from_parts(room, placeables).map_err(DocumentError::Invalid)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let json = self.to_json_string()?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!("Saved layout to {}", path.as_ref().display());
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let layout = Self::from_json_str(&content)?;
        tracing::info!(
            "Read layout '{}' from {} ({} placeables)",
            layout.room.name,
            path.as_ref().display(),
            layout.placeables.len() + layout.furniture.len()
        );
        Ok(layout)
    }

    /// Writes the snapshot on the blocking thread pool.
    pub async fn save_async(self, path: PathBuf) -> Result<(), DocumentError> {
        tokio::task::spawn_blocking(move || self.save_to_file(&path))
            .await
            .map_err(|err| DocumentError::Invalid(format!("save task failed: {err}")))?
    }
}

/// Serializes a scene to a JSON layout document.
pub fn serialize(scene: &Scene) -> Result<String, DocumentError> {
    LayoutFile::from_scene(scene).to_json_string()
}

/// Parses and validates a JSON layout document into a new scene.
pub fn deserialize(content: &str) -> Result<Scene, DocumentError> {
    LayoutFile::from_json_str(content)?.into_scene()
}
