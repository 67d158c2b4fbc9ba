use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

/// Application-level notifications. The window manager does not depend on
/// these; the dashboard publishes them after each transition so other
/// parts of the process (logging, the activity feed) can react.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WindowFocused(WindowId),
    WindowMinimized(WindowId),
    RequestReceived { request_id: String },
    RelayConnected { port: u16 },
    RelayDisconnected,
    Shutdown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
