use serde::{Deserialize, Serialize};

/// One sidebar menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl MenuItemConfig {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

pub fn default_menu() -> Vec<MenuItemConfig> {
    vec![
        MenuItemConfig::new("dashboard", "Dashboard", "📊"),
        MenuItemConfig::new("analytics", "Analytics", "📈"),
        MenuItemConfig::new("reports", "Reports", "📑"),
        MenuItemConfig::new("settings", "Settings", "⚙️"),
        MenuItemConfig::new("users", "Users", "👥"),
        MenuItemConfig::new("messages", "Messages", "✉️"),
    ]
}
