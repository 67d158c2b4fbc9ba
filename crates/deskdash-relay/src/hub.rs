//! Fan-out of received webhook requests to push subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use deskdash_common::{PushEvent, RequestRecord};
use tokio::sync::broadcast;

/// Thread-safe broadcast hub. Cloning shares the same channel.
#[derive(Clone)]
pub struct Hub {
    tx: broadcast::Sender<PushEvent>,
    received: Arc<AtomicU64>,
}

impl Hub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            received: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Publish a request to every subscriber. Returns how many received it.
    pub fn publish(&self, record: RequestRecord) -> usize {
        self.received.fetch_add(1, Ordering::Relaxed);
        let id = record.id.clone();
        match self.tx.send(PushEvent::NewRequest(record)) {
            Ok(n) => n,
            Err(_) => {
                tracing::debug!(request_id = %id, "no subscribers for request");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.tx.subscribe()
    }

    /// Number of connected push subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Total requests published since startup.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str) -> RequestRecord {
        RequestRecord {
            id: id.into(),
            timestamp: Utc::now(),
            method: "POST".into(),
            url: format!("/api/webhook/{id}"),
            headers: Default::default(),
            body: serde_json::json!({}),
            status: Default::default(),
        }
    }

    #[tokio::test]
    async fn publish_reaches_all_subscribers_in_order() {
        let hub = Hub::new(16);
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        assert_eq!(hub.publish(record("one")), 2);
        assert_eq!(hub.publish(record("two")), 2);

        for rx in [&mut a, &mut b] {
            let PushEvent::NewRequest(first) = rx.recv().await.unwrap();
            let PushEvent::NewRequest(second) = rx.recv().await.unwrap();
            assert_eq!(first.id, "one");
            assert_eq!(second.id, "two");
        }
        assert_eq!(hub.received(), 2);
    }

    #[test]
    fn publish_without_subscribers_is_counted() {
        let hub = Hub::new(4);
        assert_eq!(hub.publish(record("lonely")), 0);
        assert_eq!(hub.received(), 1);
    }

    #[tokio::test]
    async fn lagging_subscriber_skips_old_events() {
        let hub = Hub::new(2);
        let mut rx = hub.subscribe();
        for i in 0..5 {
            hub.publish(record(&i.to_string()));
        }
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(3))
        ));
        let PushEvent::NewRequest(next) = rx.recv().await.unwrap();
        assert_eq!(next.id, "3");
    }
}
