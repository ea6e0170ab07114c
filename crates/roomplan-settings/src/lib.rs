//! Room Planner Settings Crate
//!
//! Editor configuration loaded from TOML (or JSON) with validated defaults.

pub mod config;
pub mod error;

pub use config::{EditorConfig, GridSettings, PlacementSettings, UnitSettings, ViewSettings};
pub use error::{SettingsError, SettingsResult};
