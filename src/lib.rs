//! # Room Planner
//!
//! A 2D room layout planner: size a rectangular room, then arrange
//! furniture, doors and windows inside it.
//!
//! ## Architecture
//!
//! The planner is organized as a workspace with multiple crates:
//!
//! 1. **roomplan-core** - Length units, validation and document errors, shared constants
//! 2. **roomplan-settings** - Editor configuration (TOML)
//! 3. **roomplan-designer** - Scene model, interaction engine, clipboard, layout files
//! 4. **roomplan** - Main binary that integrates all crates

pub use roomplan_core::units::{format_dimension, parse_length, LengthUnit};
pub use roomplan_core::{DocumentError, ValidationError};
pub use roomplan_designer as designer;
pub use roomplan_designer::{
    DesignerState, EditorAction, FurnitureSpec, LayoutFile, ListEntry, ListViewAdapter,
    OpeningSpec, Placeable, PlaceableKind, Room, Scene,
};
pub use roomplan_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output with pretty formatting on stderr, filtered through
/// `RUST_LOG` (default `info`).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the list rows, so logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// List view that writes one row per line.
pub struct TextListView<W: std::io::Write> {
    out: W,
    rows_written: usize,
}

impl<W: std::io::Write> TextListView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: std::io::Write> ListViewAdapter for TextListView<W> {
    fn show(&mut self, entries: &[ListEntry]) {
        for entry in entries {
            if let Err(err) = writeln!(self.out, "{:<9} {}", entry.kind.label(), entry.text) {
                tracing::warn!("Failed to write list row: {}", err);
                return;
            }
            self.rows_written += 1;
        }
    }
}
