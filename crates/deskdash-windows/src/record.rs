use deskdash_common::types::{WindowId, WindowSource};
use serde::{Deserialize, Serialize};

/// Snapshot of one window as handed to the renderer.
///
/// `order` is the window's position in the focus queue at the time the
/// snapshot was taken (0 = front).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub order: usize,
    pub source: WindowSource,
}

impl WindowRecord {
    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}
