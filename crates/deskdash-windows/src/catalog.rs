//! Static window metadata and the sidebar menu.

use std::collections::HashMap;

use deskdash_config::schema::{CatalogEntryConfig, MenuItemConfig};
use serde::Serialize;

/// Display metadata for one window card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowContent {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub code: String,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub code: String,
    pub icon: String,
    pub content_file: Option<String>,
}

impl From<&CatalogEntryConfig> for CatalogEntry {
    fn from(config: &CatalogEntryConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            tags: config.tags.clone(),
            code: config.code.clone(),
            icon: config.icon.clone(),
            content_file: config.content_file.clone(),
        }
    }
}

/// Lookup table from window id to its static metadata.
///
/// Missing ids are never an error: `content` falls back to a generic
/// entry and `resolve_title` to a generated title.
#[derive(Debug, Clone, Default)]
pub struct WindowCatalog {
    entries: HashMap<String, CatalogEntry>,
    menu: Vec<MenuItem>,
}

impl WindowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config<'a>(
        entries: impl IntoIterator<Item = (&'a String, &'a CatalogEntryConfig)>,
        menu: &[MenuItemConfig],
    ) -> Self {
        let mut catalog = Self::new();
        for (id, entry) in entries {
            catalog.insert(id.clone(), CatalogEntry::from(entry));
        }
        for item in menu {
            catalog.menu.push(MenuItem {
                id: item.id.clone(),
                label: item.label.clone(),
                icon: item.icon.clone(),
            });
        }
        catalog
    }

    pub fn insert(&mut self, id: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(id.into(), entry);
    }

    pub fn push_menu_item(&mut self, item: MenuItem) {
        self.menu.push(item);
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sidebar items in display order.
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    /// Card content for a window, or the generic placeholder.
    pub fn content(&self, id: &str) -> WindowContent {
        match self.entries.get(id) {
            Some(entry) => WindowContent {
                title: entry.title.clone(),
                description: entry.description.clone(),
                tags: entry.tags.clone(),
                code: entry.code.clone(),
            },
            None => WindowContent {
                title: "Window".into(),
                description: "This window is not configured yet.".into(),
                tags: vec!["DEFAULT".into()],
                code: "// Window content not available".into(),
            },
        }
    }

    /// Title for a new record: catalog title, then menu label, then the
    /// id with its first letter capitalized.
    pub fn resolve_title(&self, id: &str) -> String {
        if let Some(entry) = self.entries.get(id) {
            if !entry.title.is_empty() {
                return entry.title.clone();
            }
        }
        if let Some(item) = self.menu_item(id) {
            return item.label.clone();
        }
        capitalize(id)
    }

    /// Relative content file path configured for a window.
    pub fn content_file(&self, id: &str) -> Option<&str> {
        self.entries.get(id)?.content_file.as_deref()
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
