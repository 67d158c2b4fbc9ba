use serde::{Deserialize, Serialize};

/// Configuration for the webhook relay server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Interface to bind.
    pub host: String,
    /// Fixed port. 0 means scan from `start_port`.
    pub port: u16,
    /// First port probed during auto-discovery (valid range: 1024-65535).
    pub start_port: u16,
    /// How many ports past `start_port` to try (valid range: 1-1000).
    pub scan_limit: u16,
    /// File the chosen port is written to, removed on shutdown.
    pub port_file: String,
    /// Human-readable summary with a sample curl command.
    pub summary_file: String,
    /// Port the dashboard UI is reported on in `/status`.
    pub dashboard_port: u16,
    /// Seconds between "still running" log lines. 0 disables.
    pub heartbeat_secs: u64,
    /// Allowed CORS origin, `*` for any.
    pub cors_origin: String,
    /// Push channel buffer per subscriber (valid range: 1-65536).
    pub channel_capacity: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 0,
            start_port: 3002,
            scan_limit: 100,
            port_file: ".webhook-port".into(),
            summary_file: "WEBHOOK_PORT.txt".into(),
            dashboard_port: 3001,
            heartbeat_secs: 30,
            cors_origin: "*".into(),
            channel_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_config_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.port, 0);
        assert_eq!(config.start_port, 3002);
        assert_eq!(config.scan_limit, 100);
        assert_eq!(config.port_file, ".webhook-port");
        assert_eq!(config.heartbeat_secs, 30);
        assert_eq!(config.cors_origin, "*");
    }

    #[test]
    fn relay_config_partial_toml() {
        let config: RelayConfig = toml::from_str("port = 4000\nheartbeat_secs = 0").unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.heartbeat_secs, 0);
        assert_eq!(config.dashboard_port, 3001);
    }
}
