//! JSON bodies returned by the relay's HTTP endpoints.

use serde::{Deserialize, Serialize};

/// Answer to an accepted webhook request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    pub success: bool,
    pub message: String,
    pub request_id: String,
}

impl WebhookAck {
    pub fn received(request_id: String) -> Self {
        Self {
            success: true,
            message: "Request received".into(),
            request_id,
        }
    }
}

/// Rejected webhook body.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookError {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
    pub ports: StatusPorts,
    pub urls: StatusUrls,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusPorts {
    pub webhook: u16,
    pub dashboard: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUrls {
    pub dashboard: String,
    pub webhook: String,
    pub health: String,
    pub status: String,
}

impl StatusUrls {
    pub fn for_ports(webhook: u16, dashboard: u16) -> Self {
        Self {
            dashboard: format!("http://localhost:{dashboard}"),
            webhook: format!("http://localhost:{webhook}/api/webhook"),
            health: format!("http://localhost:{webhook}/health"),
            status: format!("http://localhost:{webhook}/status"),
        }
    }
}
