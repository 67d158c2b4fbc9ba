//! Virtual window management for the deskdash dashboard.
//!
//! The [`WindowManager`] decides which windows are visible and in what
//! order under a cap on simultaneously visible windows. The
//! [`WindowCatalog`] supplies static metadata, and [`ContentCache`] loads
//! renderable content lazily without touching window state.

pub mod catalog;
pub mod commands;
pub mod content;
pub mod manager;
pub mod queue;
pub mod record;

pub use catalog::{CatalogEntry, MenuItem, WindowCatalog, WindowContent};
pub use commands::WindowCommand;
pub use content::{CatalogContentLoader, Content, ContentCache, ContentLoader, ContentOrigin};
pub use manager::{DesktopView, WindowManager};
pub use queue::FocusQueue;
pub use record::WindowRecord;
