//! Finding a running relay and building listener URLs for it.

use std::ops::RangeInclusive;
use std::time::Duration;

use deskdash_common::short_id;

/// Probe `GET /health` on each port in order; the first 2xx wins.
pub async fn probe_relay_port(
    client: &reqwest::Client,
    host: &str,
    ports: RangeInclusive<u16>,
) -> Option<u16> {
    for port in ports {
        let url = format!("http://{host}:{port}/health");
        match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(port, "Found relay");
                return Some(port);
            }
            Ok(response) => {
                tracing::debug!(port, status = %response.status(), "Health probe rejected");
            }
            Err(e) => {
                tracing::trace!(port, error = %e, "Health probe failed");
            }
        }
    }
    None
}

/// Client tuned for quick local probes.
pub fn probe_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(800))
        .build()
}

/// Fresh webhook URL with a random endpoint id.
pub fn listener_url(host: &str, port: u16) -> String {
    format!("http://{host}:{port}/api/webhook/{}", short_id())
}

/// Push channel URL of a relay.
pub fn push_url(host: &str, port: u16) -> String {
    format!("ws://{host}:{port}/ws")
}
