//! Configuration schema types for deskdash.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock dashboard layout.

mod activity;
mod catalog;
mod logging;
mod menu;
mod relay;
mod windows;

pub use activity::*;
pub use catalog::*;
pub use logging::*;
pub use menu::*;
pub use relay::*;
pub use windows::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for deskdash.
///
/// Note that list and table sections (`menu`, `catalog`,
/// `windows.initial`) replace the built-in defaults wholesale when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskdashConfig {
    pub windows: WindowsConfig,
    pub menu: Vec<MenuItemConfig>,
    pub catalog: BTreeMap<String, CatalogEntryConfig>,
    pub relay: RelayConfig,
    pub activity: ActivityConfig,
    pub logging: LoggingConfig,
}

impl Default for DeskdashConfig {
    fn default() -> Self {
        Self {
            windows: WindowsConfig::default(),
            menu: default_menu(),
            catalog: default_catalog(),
            relay: RelayConfig::default(),
            activity: ActivityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
