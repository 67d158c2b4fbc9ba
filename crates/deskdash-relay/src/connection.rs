//! Per-subscriber push loop: forward hub events, answer pings.

use axum::extract::ws::{Message, WebSocket};
use deskdash_common::PushEvent;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

/// Drive a single push subscriber until either side goes away.
pub async fn handle_socket(
    socket: WebSocket,
    mut events: broadcast::Receiver<PushEvent>,
    conn_id: String,
) {
    let (mut sink, mut stream) = socket.split();

    tracing::info!(conn = %conn_id, "Subscriber connected");

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let json = match serde_json::to_string(&event) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::warn!(conn = %conn_id, error = %e, "Failed to encode push event");
                                continue;
                            }
                        };
                        if sink.send(Message::Text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(conn = %conn_id, skipped, "Subscriber lagged, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            // Client text frames carry nothing the relay acts on.
            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(conn = %conn_id, error = %e, "WS error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    tracing::info!(conn = %conn_id, "Subscriber disconnected");
}
