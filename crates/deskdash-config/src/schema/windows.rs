//! Window manager configuration: visible cap, start layout, content root.

use serde::{Deserialize, Serialize};

/// A window present when the dashboard starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitialWindowConfig {
    pub id: String,
    /// Initial focus rank (lower = front). Equal values keep list order.
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub minimized: bool,
}

impl InitialWindowConfig {
    pub fn new(id: &str, order: u32, minimized: bool) -> Self {
        Self {
            id: id.into(),
            order,
            minimized,
        }
    }
}

/// Window manager settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Maximum simultaneously visible windows (valid range: 1-10).
    /// 1 gives single-window mode.
    pub max_visible: u32,
    /// Menu item highlighted at startup.
    pub active_menu_item: String,
    /// Directory that catalog `content_file` paths are resolved against.
    pub content_dir: String,
    pub initial: Vec<InitialWindowConfig>,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            active_menu_item: "dashboard".into(),
            content_dir: "content".into(),
            initial: vec![
                InitialWindowConfig::new("code-preview", 0, false),
                InitialWindowConfig::new("recent-activity", 1, true),
                InitialWindowConfig::new("quick-actions", 2, true),
            ],
        }
    }
}
