//! Editor configuration
//!
//! Configuration is organized into logical sections:
//! - Units (display units for room and furniture dimensions)
//! - Grid (cell size, snapping, grid visibility)
//! - View (pixel density, zoom bounds)
//! - Placement (room-edge locking, paste offset)
//!
//! Every section is optional in the file; missing keys take their defaults.

use crate::error::{SettingsError, SettingsResult};
use roomplan_core::constants::{
    DEFAULT_GRID_CELL_M, DEFAULT_PASTE_OFFSET_M, DEFAULT_PIXELS_PER_METRE, MAX_ZOOM, MIN_ZOOM,
};
pub use roomplan_core::units::LengthUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    /// Unit for room width/depth inputs
    pub room_unit: LengthUnit,
    /// Unit for furniture, door and window inputs
    pub furniture_unit: LengthUnit,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            room_unit: LengthUnit::Feet,
            furniture_unit: LengthUnit::Inches,
        }
    }
}

/// Grid and snapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid cell edge length in metres
    pub cell_size_m: f64,
    /// Snap dragged items to the grid
    pub snap_enabled: bool,
    /// Draw grid lines inside the room
    pub show_grid: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size_m: DEFAULT_GRID_CELL_M,
            snap_enabled: false,
            show_grid: true,
        }
    }
}

/// Canvas view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Pixel density at 100% zoom
    pub pixels_per_metre: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            pixels_per_metre: DEFAULT_PIXELS_PER_METRE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Placement policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Keep dragged items inside the room walls
    pub lock_to_room: bool,
    /// Distance pasted copies are shifted from their source, in metres
    pub paste_offset_m: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            lock_to_room: false,
            paste_offset_m: DEFAULT_PASTE_OFFSET_M,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub units: UnitSettings,
    pub grid: GridSettings,
    pub view: ViewSettings,
    pub placement: PlacementSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration path (`<config dir>/roomplan/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roomplan").join("config.toml"))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, else the platform default file when present,
    /// else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                tracing::debug!("No editor config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.grid.cell_size_m.is_finite() && self.grid.cell_size_m > 0.0) {
            return Err(SettingsError::invalid(
                "grid.cell_size_m",
                "must be a positive number",
            ));
        }

        if !(self.view.pixels_per_metre.is_finite() && self.view.pixels_per_metre > 0.0) {
            return Err(SettingsError::invalid(
                "view.pixels_per_metre",
                "must be a positive number",
            ));
        }

        if !(self.view.min_zoom > 0.0 && self.view.min_zoom < self.view.max_zoom) {
            return Err(SettingsError::invalid(
                "view.min_zoom",
                format!(
                    "must be positive and below max_zoom ({})",
                    self.view.max_zoom
                ),
            ));
        }

        if !(self.placement.paste_offset_m.is_finite() && self.placement.paste_offset_m >= 0.0) {
            return Err(SettingsError::invalid(
                "placement.paste_offset_m",
                "must be zero or positive",
            ));
        }

        Ok(())
    }
}
