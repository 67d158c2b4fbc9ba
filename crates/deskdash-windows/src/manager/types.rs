//! Core types and constructors for WindowManager.

use std::collections::HashMap;
use std::sync::Arc;

use deskdash_common::types::{WindowId, WindowSource};
use deskdash_config::schema::{InitialWindowConfig, WindowsConfig};

use crate::catalog::WindowCatalog;
use crate::queue::FocusQueue;
use crate::record::WindowRecord;

/// Mutable per-window state. Position lives in the focus queue.
#[derive(Debug, Clone)]
pub(super) struct Slot {
    pub(super) id: WindowId,
    pub(super) title: String,
    pub(super) source: WindowSource,
    pub(super) open: bool,
    pub(super) minimized: bool,
    pub(super) maximized: bool,
}

impl Slot {
    pub(super) fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }
}

/// Decides which virtual windows are visible and in what order.
///
/// Every window ever opened keeps one slot for the life of the manager;
/// closing only clears its `open` flag. Focus order is an explicit queue,
/// and at most `max_visible` windows are open and not minimized after any
/// transition.
pub struct WindowManager {
    /// Window state, indexed by slot (insertion order).
    pub(super) slots: Vec<Slot>,
    /// Slot lookup by window id.
    pub(super) index: HashMap<WindowId, usize>,
    /// Front-to-back focus order over slots.
    pub(super) queue: FocusQueue,
    /// Last clicked menu item (highlight only).
    pub(super) active_menu_item: String,
    /// Visible-window cap.
    pub(super) max_visible: usize,
    pub(super) catalog: Arc<WindowCatalog>,
}

impl WindowManager {
    /// Create an empty manager with the given cap (clamped to at least 1).
    pub fn new(catalog: Arc<WindowCatalog>, max_visible: usize) -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            queue: FocusQueue::new(),
            active_menu_item: String::new(),
            max_visible: max_visible.max(1),
            catalog,
        }
    }

    /// Build the session-start state from configuration.
    pub fn from_config(config: &WindowsConfig, catalog: Arc<WindowCatalog>) -> Self {
        let mut mgr = Self::new(catalog, config.max_visible as usize);
        mgr.active_menu_item = config.active_menu_item.clone();
        mgr.seed(&config.initial);
        mgr
    }

    /// Insert initial windows ranked by `order`; ties keep list order.
    fn seed(&mut self, initial: &[InitialWindowConfig]) {
        let mut sorted: Vec<&InitialWindowConfig> = initial.iter().collect();
        sorted.sort_by_key(|w| w.order);

        for window in sorted {
            let id = WindowId::from(window.id.as_str());
            if self.index.contains_key(&id) {
                tracing::warn!(window = %id, "duplicate initial window ignored");
                continue;
            }
            let slot = self.queue.push_back();
            self.slots.push(Slot {
                title: self.catalog.resolve_title(id.as_str()),
                id: id.clone(),
                source: WindowSource::Main,
                open: true,
                minimized: window.minimized,
                maximized: false,
            });
            self.index.insert(id, slot);
        }

        self.enforce_cap();
    }

    // -- Accessors --

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Change the cap, demoting overflow immediately.
    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible.max(1);
        self.enforce_cap();
    }

    pub fn active_menu_item(&self) -> &str {
        &self.active_menu_item
    }

    /// Number of records ever created (open or closed).
    pub fn window_count(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn catalog(&self) -> &Arc<WindowCatalog> {
        &self.catalog
    }

    /// Snapshot of a single record, including its current order.
    pub fn record(&self, id: &str) -> Option<WindowRecord> {
        let slot = self.slot_of(id)?;
        let order = self.queue.rank(slot)?;
        Some(self.snapshot(slot, order))
    }

    pub(super) fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(super) fn snapshot(&self, slot: usize, order: usize) -> WindowRecord {
        let s = &self.slots[slot];
        WindowRecord {
            id: s.id.clone(),
            title: s.title.clone(),
            is_open: s.open,
            is_minimized: s.minimized,
            is_maximized: s.maximized,
            order,
            source: s.source,
        }
    }
}
