//! Lazy window content: a pluggable loader plus an at-most-once cache.

mod cache;
mod loader;

pub use cache::ContentCache;
pub use loader::{CatalogContentLoader, Content, ContentLoader, ContentOrigin};
