//! HTTP surface of the relay: webhook intake, health, status, port file,
//! and the push channel upgrade.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Request, State, WebSocketUpgrade};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use deskdash_common::{new_correlation_id, short_id, RequestRecord, RequestStatus};
use tower_http::cors::{Any, CorsLayer};

use crate::connection::handle_socket;
use crate::hub::Hub;
use crate::protocol::{
    HealthResponse, StatusPorts, StatusResponse, StatusUrls, WebhookAck, WebhookError,
};

/// Shared handler state.
#[derive(Clone)]
pub struct RelayState {
    pub hub: Hub,
    pub webhook_port: u16,
    pub dashboard_port: u16,
    pub port_file: PathBuf,
}

pub fn router(state: RelayState, cors_origin: &str) -> Router {
    Router::new()
        .route("/api/webhook/:endpoint", post(receive_webhook))
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/.webhook-port", get(port_file))
        .route("/ws", get(ws_upgrade))
        .layer(cors_layer(cors_origin))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin, allowing any");
            layer.allow_origin(Any)
        }
    }
}

async fn receive_webhook(
    State(state): State<RelayState>,
    Path(endpoint): Path<String>,
    request: Request,
) -> Response {
    let method = request.method().to_string();
    let url = request.uri().to_string();
    let headers = header_map(request.headers());

    let body = match read_body(request).await {
        Ok(body) => body,
        Err(response) => return response,
    };

    let record = RequestRecord {
        id: short_id(),
        timestamp: Utc::now(),
        method,
        url,
        headers,
        body,
        status: RequestStatus::Success,
    };
    let request_id = record.id.clone();

    let delivered = state.hub.publish(record);
    tracing::info!(
        endpoint = %endpoint,
        request_id = %request_id,
        subscribers = delivered,
        "Webhook received"
    );

    Json(WebhookAck::received(request_id)).into_response()
}

/// Decode a webhook body: JSON stays JSON, forms become objects, anything
/// else is kept as a string. Empty bodies become `{}`.
async fn read_body(request: Request) -> Result<serde_json::Value, Response> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        let object: serde_json::Map<String, serde_json::Value> = fields
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        return Ok(serde_json::Value::Object(object));
    }

    let bytes = Bytes::from_request(request, &())
        .await
        .map_err(IntoResponse::into_response)?;
    if bytes.is_empty() {
        return Ok(serde_json::json!({}));
    }

    if content_type.starts_with("application/json") || content_type.contains("+json") {
        return serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed JSON webhook body");
            (
                StatusCode::BAD_REQUEST,
                Json(WebhookError {
                    success: false,
                    message: "Invalid JSON body".into(),
                }),
            )
                .into_response()
        });
    }

    Ok(serde_json::Value::String(
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}

/// Repeated headers are joined with ", ". Non-UTF-8 bytes are replaced
/// rather than dropping the header.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()))
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_string(), joined)
        })
        .collect()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn status(State(state): State<RelayState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".into(),
        timestamp: Utc::now().to_rfc3339(),
        ports: StatusPorts {
            webhook: state.webhook_port,
            dashboard: state.dashboard_port,
        },
        urls: StatusUrls::for_ports(state.webhook_port, state.dashboard_port),
    })
}

async fn port_file(State(state): State<RelayState>) -> Response {
    match tokio::fs::read_to_string(&state.port_file).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/plain")],
            contents.trim().to_string(),
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "Port file not found").into_response()
        }
        Err(e) => {
            tracing::warn!(path = %state.port_file.display(), error = %e, "Port file read failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading port file").into_response()
        }
    }
}

async fn ws_upgrade(State(state): State<RelayState>, ws: WebSocketUpgrade) -> Response {
    let events = state.hub.subscribe();
    let conn_id = new_correlation_id();
    ws.on_upgrade(move |socket| handle_socket(socket, events, conn_id))
}
