//! DeskdashApp struct definition and constructor.

use std::sync::Arc;

use deskdash_common::EventBus;
use deskdash_config::DeskdashConfig;
use deskdash_windows::{CatalogContentLoader, ContentCache, ContentLoader, WindowCatalog, WindowManager};

use crate::activity::{ActivityLog, ConnectionStatus};

/// Result of handling one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Top-level dashboard state.
pub struct DeskdashApp {
    pub(super) manager: WindowManager,
    pub(super) catalog: Arc<WindowCatalog>,
    pub(super) content: ContentCache,
    pub(super) event_bus: EventBus,

    // Activity feed
    pub(super) activity: ActivityLog,
    pub(super) relay_status: ConnectionStatus,
    pub(super) relay_host: String,
    /// Port of the relay once discovered.
    pub(super) relay_port: Option<u16>,
    /// Port used for listener URLs before discovery.
    pub(super) default_port: u16,
}

impl DeskdashApp {
    pub fn new(config: &DeskdashConfig) -> Self {
        let catalog = Arc::new(WindowCatalog::from_config(&config.catalog, &config.menu));
        let loader = CatalogContentLoader::new(catalog.clone(), &config.windows.content_dir);
        Self::with_loader(config, catalog, Arc::new(loader))
    }

    /// Build with an explicit content loader.
    pub fn with_loader(
        config: &DeskdashConfig,
        catalog: Arc<WindowCatalog>,
        loader: Arc<dyn ContentLoader>,
    ) -> Self {
        let manager = WindowManager::from_config(&config.windows, catalog.clone());
        tracing::info!(
            windows = manager.window_count(),
            max_visible = manager.max_visible(),
            "Window manager ready"
        );

        Self {
            manager,
            catalog,
            content: ContentCache::new(loader),
            event_bus: EventBus::new(256),
            activity: ActivityLog::new(config.activity.max_entries),
            relay_status: ConnectionStatus::Disconnected,
            relay_host: config.activity.relay_host.clone(),
            relay_port: None,
            default_port: config.activity.probe_start,
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}
