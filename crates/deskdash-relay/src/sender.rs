//! `send` subcommand: post test payloads to a webhook URL.

use std::time::Duration;

use chrono::Utc;
use deskdash_common::RelayError;
use serde_json::{json, Value};

const USER_AGENT: &str = "TestApp/1.0";

/// Body of the `n`-th test request.
pub fn test_payload(n: u32) -> Value {
    json!({
        "message": format!("Test webhook request #{n}"),
        "timestamp": Utc::now().to_rfc3339(),
        "data": {
            "userId": 12345,
            "action": "test_action",
            "metadata": {
                "source": "deskdash-relay",
                "version": "1.0.0",
            },
        },
    })
}

/// Post `count` payloads, pausing `interval` between them. Failures are
/// logged and do not stop the run. Returns the number of 2xx responses.
pub async fn send_test_requests(
    url: &str,
    count: u32,
    interval: Duration,
) -> Result<u32, RelayError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| RelayError::Http(e.to_string()))?;

    tracing::info!(url, count, "Sending test webhook requests");

    let mut ok = 0;
    for n in 1..=count {
        match client.post(url).json(&test_payload(n)).send().await {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::info!(request = n, status = %status, body = %body, "Response");
                if status.is_success() {
                    ok += 1;
                }
            }
            Err(e) => {
                tracing::error!(request = n, error = %e, "Request failed");
            }
        }

        if n < count && !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }

    tracing::info!(sent = count, succeeded = ok, "Test requests finished");
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let payload = test_payload(2);
        assert_eq!(payload["message"], "Test webhook request #2");
        assert_eq!(payload["data"]["userId"], 12345);
        assert_eq!(payload["data"]["metadata"]["source"], "deskdash-relay");
        assert!(payload["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unreachable_target_does_not_abort() {
        // Nothing listens on port 9 of the loopback interface in CI.
        let ok = send_test_requests("http://127.0.0.1:9/api/webhook/x", 2, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(ok, 0);
    }
}
