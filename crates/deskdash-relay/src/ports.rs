//! Port discovery and the port files other tools read to find the relay.

use std::io;
use std::path::{Path, PathBuf};

use deskdash_common::RelayError;
use deskdash_config::schema::RelayConfig;
use tokio::net::TcpListener;

/// Bind the configured port, or the first free port in the scan range.
pub async fn bind_listener(config: &RelayConfig) -> Result<(TcpListener, u16), RelayError> {
    if config.port != 0 {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| RelayError::Bind { addr, source })?;
        return Ok((listener, config.port));
    }

    let start = config.start_port;
    let end = start.saturating_add(config.scan_limit);
    for port in start..=end {
        match TcpListener::bind((config.host.as_str(), port)).await {
            Ok(listener) => {
                let port = listener.local_addr().map(|a| a.port()).unwrap_or(port);
                return Ok((listener, port));
            }
            Err(e) => {
                tracing::debug!(port, error = %e, "Port unavailable, trying next");
            }
        }
    }

    Err(RelayError::NoAvailablePort { start, end })
}

/// Text of the human-readable summary file.
pub fn port_summary(webhook_port: u16, dashboard_port: u16) -> String {
    format!(
        "Webhook Server Port: {webhook_port}\n\
         Dashboard Port: {dashboard_port}\n\
         \n\
         Test with:\n\
         curl -X POST http://localhost:{webhook_port}/api/webhook/test123 \
         -H \"Content-Type: application/json\" -d '{{\"message\": \"Hello!\"}}'\n"
    )
}

/// Paths of the port file and summary file under `dir`.
pub fn port_file_paths(dir: &Path, config: &RelayConfig) -> (PathBuf, PathBuf) {
    (dir.join(&config.port_file), dir.join(&config.summary_file))
}

/// Write both port files after a successful bind.
pub fn write_port_files(dir: &Path, config: &RelayConfig, port: u16) -> Result<(), RelayError> {
    let (port_file, summary_file) = port_file_paths(dir, config);
    std::fs::write(&port_file, port.to_string())
        .map_err(|e| RelayError::PortFile(format!("{}: {e}", port_file.display())))?;
    std::fs::write(&summary_file, port_summary(port, config.dashboard_port))
        .map_err(|e| RelayError::PortFile(format!("{}: {e}", summary_file.display())))?;
    Ok(())
}

/// Remove the port file on shutdown. A missing file is not an error.
pub fn remove_port_file(dir: &Path, config: &RelayConfig) {
    let (port_file, _) = port_file_paths(dir, config);
    match std::fs::remove_file(&port_file) {
        Ok(()) => tracing::info!(path = %port_file.display(), "Removed port file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::debug!(path = %port_file.display(), error = %e, "Could not remove port file"),
    }
}
