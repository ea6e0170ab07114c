//! File I/O operations (save, load, new) for designer state.

use anyhow::Context;
use chrono::Utc;
use roomplan_core::DocumentError;
use std::future::Future;
use std::path::{Path, PathBuf};

use super::DesignerState;
use crate::serialization::LayoutFile;

impl DesignerState {
    /// Owned copy of the current layout, ready to be written anywhere.
    pub fn snapshot(&self) -> LayoutFile {
        let mut layout = LayoutFile::from_scene(&self.scene);
        layout.metadata.created = self.created;
        layout
    }

    /// Save layout to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.snapshot()
            .save_to_file(path)
            .with_context(|| format!("Failed to save layout to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load layout from file.
    ///
    /// The document is read and validated completely before anything is
    /// replaced; on error the current scene, selection and clipboard are
    /// left as they were.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let layout = LayoutFile::load_from_file(path)
            .with_context(|| format!("Failed to read layout {}", path.display()))?;
        let created = layout.metadata.created;
        let scene = layout
            .into_scene()
            .with_context(|| format!("Invalid layout {}", path.display()))?;

        self.selection.reset();
        self.scene.replace_with(scene);
        self.sync_selection();

        self.created = created;
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Loaded '{}' with {} placeables",
            self.scene.room().name,
            self.scene.len()
        );
        Ok(())
    }

    /// Snapshots the scene now and returns a future that writes it on the
    /// blocking pool. The future owns only the snapshot, so editing may
    /// continue while it runs.
    pub fn save_snapshot_async(
        &self,
        path: PathBuf,
    ) -> impl Future<Output = Result<(), DocumentError>> + Send + 'static {
        self.snapshot().save_async(path)
    }

    /// Like [`save_to_file`](Self::save_to_file) but performs the write on
    /// the blocking pool.
    pub async fn save_to_file_async(&mut self, path: impl Into<PathBuf>) -> anyhow::Result<()> {
        let path = path.into();
        self.save_snapshot_async(path.clone())
            .await
            .with_context(|| format!("Failed to save layout to {}", path.display()))?;

        self.current_file_path = Some(path);
        self.is_modified = false;
        Ok(())
    }

    /// Create new room (clear all).
    pub fn new_room(&mut self) {
        self.scene.clear();
        self.sync_selection();
        self.current_file_path = None;
        self.is_modified = false;
        self.created = Utc::now();
        tracing::debug!("Started a new room");
    }

    /// Title-bar name: file name (or room name when unsaved), `*` when modified.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.scene.room().name.clone());
        if self.is_modified {
            format!("{name}*")
        } else {
            name
        }
    }
}
