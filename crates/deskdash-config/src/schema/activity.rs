use serde::{Deserialize, Serialize};

/// Dashboard activity feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Relay host the dashboard connects to.
    pub relay_host: String,
    /// Entries kept in the feed. 0 keeps everything.
    pub max_entries: usize,
    /// First port probed for a running relay.
    pub probe_start: u16,
    /// Last port probed for a running relay (inclusive).
    pub probe_end: u16,
    /// Seconds between relay port probes.
    pub probe_interval_secs: u64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            relay_host: "localhost".into(),
            max_entries: 500,
            probe_start: 3002,
            probe_end: 3010,
            probe_interval_secs: 5,
        }
    }
}
