//! Single-slot clipboard holding one placeable snapshot.

use crate::model::Placeable;

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Placeable>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot, replacing any previous one.
    pub fn copy(&mut self, placeable: &Placeable) {
        tracing::debug!("Copied '{}' to clipboard", placeable.name);
        self.slot = Some(placeable.clone());
    }

    /// Returns a clone of the snapshot; the slot keeps its content so the
    /// same item can be pasted repeatedly.
    pub fn paste(&self) -> Option<Placeable> {
        self.slot.clone()
    }

    /// Moves the snapshot so the next paste lands beyond the last one.
    pub fn shift(&mut self, dx: f64, dy: f64) {
        if let Some(placeable) = self.slot.as_mut() {
            placeable.translate(dx, dy);
        }
    }

    pub fn peek(&self) -> Option<&Placeable> {
        self.slot.as_ref()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
