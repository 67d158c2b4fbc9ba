use std::collections::HashMap;
use std::sync::Arc;

use deskdash_common::types::WindowId;
use tokio::sync::{OnceCell, RwLock};

use super::loader::{Content, ContentLoader};

type Slot = Arc<OnceCell<Option<Arc<Content>>>>;

/// Per-window content, loaded at most once.
///
/// Concurrent callers for the same id share one load. A failed load is
/// logged and remembered as `None`; it is not retried.
pub struct ContentCache {
    loader: Arc<dyn ContentLoader>,
    slots: RwLock<HashMap<WindowId, Slot>>,
}

impl ContentCache {
    pub fn new(loader: Arc<dyn ContentLoader>) -> Self {
        Self {
            loader,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Return cached content for `id`, loading it on first request.
    pub async fn get_or_load(&self, id: &str) -> Option<Arc<Content>> {
        let slot = self.slot(id).await;
        slot.get_or_init(|| async {
            match self.loader.load(id).await {
                Ok(content) => {
                    tracing::debug!(window = %id, "content loaded");
                    Some(Arc::new(content))
                }
                Err(e) => {
                    tracing::warn!(window = %id, error = %e, "content load failed");
                    None
                }
            }
        })
        .await
        .clone()
    }

    /// Cached content without triggering a load.
    pub async fn get(&self, id: &str) -> Option<Arc<Content>> {
        let slots = self.slots.read().await;
        slots.get(id)?.get()?.clone()
    }

    /// Whether a load for `id` has completed (successfully or not).
    pub async fn is_attempted(&self, id: &str) -> bool {
        let slots = self.slots.read().await;
        slots.get(id).is_some_and(|slot| slot.initialized())
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    async fn slot(&self, id: &str) -> Slot {
        if let Some(slot) = self.slots.read().await.get(id) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().await;
        Arc::clone(slots.entry(WindowId::from(id)).or_default())
    }
}
