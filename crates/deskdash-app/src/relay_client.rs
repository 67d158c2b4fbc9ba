//! Outbound push-channel client: finds the relay, subscribes, and forwards
//! received requests to the dashboard task.

use std::ops::RangeInclusive;
use std::time::Duration;

use deskdash_common::{PushEvent, RequestRecord};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::activity::ConnectionStatus;
use crate::port_probe;

/// Events the relay client sends to the dashboard task.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    Discovered(u16),
    Status(ConnectionStatus),
    Request(RequestRecord),
}

/// Configuration for the relay client.
pub struct RelayClientConfig {
    pub host: String,
    /// Ports probed when `url` is not set.
    pub probe_ports: RangeInclusive<u16>,
    pub probe_interval: Duration,
    /// Fixed push URL; disables probing.
    pub url: Option<String>,
}

/// Run the relay client with auto-reconnect.
pub async fn run_relay_client(
    config: RelayClientConfig,
    event_tx: mpsc::Sender<RelayEvent>,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    let mut backoff = Duration::from_secs(1);
    let max_backoff = Duration::from_secs(30);

    loop {
        let url = match &config.url {
            Some(url) => url.clone(),
            None => match discover(&config, &event_tx, &mut shutdown_rx).await {
                Some(port) => port_probe::push_url(&config.host, port),
                None => return,
            },
        };

        tracing::info!(url = %url, "Connecting to relay...");
        let _ = event_tx.send(RelayEvent::Status(ConnectionStatus::Connecting)).await;

        match connect_async(url.as_str()).await {
            Ok((ws, _)) => {
                backoff = Duration::from_secs(1);
                let _ = event_tx.send(RelayEvent::Status(ConnectionStatus::Connected)).await;

                match relay_session(ws, &event_tx, &mut shutdown_rx).await {
                    SessionResult::Shutdown => {
                        tracing::info!("Relay client shutting down");
                        return;
                    }
                    SessionResult::Disconnected(reason) => {
                        tracing::warn!(reason = %reason, "Relay connection lost");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to connect to relay");
            }
        }

        let _ = event_tx.send(RelayEvent::Status(ConnectionStatus::Disconnected)).await;

        tokio::select! {
            _ = tokio::time::sleep(backoff) => {}
            _ = shutdown_rx.recv() => return,
        }

        backoff = (backoff * 2).min(max_backoff);
    }
}

/// Probe until a relay answers. `None` means shutdown was requested.
async fn discover(
    config: &RelayClientConfig,
    event_tx: &mpsc::Sender<RelayEvent>,
    shutdown_rx: &mut mpsc::Receiver<()>,
) -> Option<u16> {
    let client = match port_probe::probe_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Could not build probe client");
            return None;
        }
    };

    loop {
        let probe = port_probe::probe_relay_port(&client, &config.host, config.probe_ports.clone());
        tokio::select! {
            found = probe => {
                if let Some(port) = found {
                    let _ = event_tx.send(RelayEvent::Discovered(port)).await;
                    return Some(port);
                }
            }
            _ = shutdown_rx.recv() => return None,
        }

        tracing::debug!(
            start = config.probe_ports.start(),
            end = config.probe_ports.end(),
            "No relay found, retrying"
        );
        tokio::select! {
            _ = tokio::time::sleep(config.probe_interval) => {}
            _ = shutdown_rx.recv() => return None,
        }
    }
}

enum SessionResult {
    Shutdown,
    Disconnected(String),
}

async fn relay_session(
    ws: tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    event_tx: &mpsc::Sender<RelayEvent>,
    shutdown_rx: &mut mpsc::Receiver<()>,
) -> SessionResult {
    let (mut sink, mut stream) = ws.split();

    loop {
        tokio::select! {
            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(record) = parse_push(&text) {
                            tracing::debug!(request_id = %record.id, "Request relayed");
                            if event_tx.send(RelayEvent::Request(record)).await.is_err() {
                                return SessionResult::Shutdown;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        return SessionResult::Disconnected("relay closed connection".into());
                    }
                    Some(Err(e)) => {
                        return SessionResult::Disconnected(format!("ws error: {e}"));
                    }
                    _ => {}
                }
            }

            _ = shutdown_rx.recv() => {
                let _ = sink.close().await;
                return SessionResult::Shutdown;
            }
        }
    }
}

/// Decode a push frame. Unknown events are ignored.
fn parse_push(text: &str) -> Option<RequestRecord> {
    match serde_json::from_str::<PushEvent>(text) {
        Ok(PushEvent::NewRequest(record)) => Some(record),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unrecognized push frame");
            None
        }
    }
}
