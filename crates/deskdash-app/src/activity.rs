//! Newest-first feed of relayed webhook requests.

use std::collections::VecDeque;
use std::fmt;

use deskdash_common::RequestRecord;

/// Push-channel connection state shown above the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bounded request log. `max_entries == 0` keeps everything.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<RequestRecord>,
    max_entries: usize,
}

impl ActivityLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Add a request at the front, dropping the oldest past the bound.
    pub fn push(&mut self, record: RequestRecord) {
        self.entries.push_front(record);
        if self.max_entries > 0 {
            self.entries.truncate(self.max_entries);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &RequestRecord> {
        self.entries.iter()
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
            body: serde_json::Value::Null,
            status: Default::default(),
        }
    }

    fn ids(log: &ActivityLog) -> Vec<&str> {
        log.entries().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let mut log = ActivityLog::new(10);
        log.push(record("a"));
        log.push(record("b"));
        assert_eq!(ids(&log), vec!["b", "a"]);
    }

    #[test]
    fn bounded_drops_oldest() {
        let mut log = ActivityLog::new(2);
        for id in ["a", "b", "c"] {
            log.push(record(id));
        }
        assert_eq!(ids(&log), vec!["c", "b"]);
    }

    #[test]
    fn zero_bound_is_unbounded() {
        let mut log = ActivityLog::new(0);
        for i in 0..1000 {
            log.push(record(&i.to_string()));
        }
        assert_eq!(log.len(), 1000);
    }

    #[test]
    fn clear_empties() {
        let mut log = ActivityLog::new(5);
        log.push(record("a"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ConnectionStatus::Disconnected.label(), "Disconnected");
        assert_eq!(ConnectionStatus::Connecting.to_string(), "Connecting...");
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    }
}
