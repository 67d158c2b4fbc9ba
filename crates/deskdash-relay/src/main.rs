//! deskdash-relay: webhook relay server for the deskdash dashboard.
//!
//! Accepts HTTP requests on `/api/webhook/{endpoint}` and pushes each one
//! to every connected dashboard over a WebSocket channel. The chosen port
//! is written to a port file so the dashboard can find it.

mod connection;
mod hub;
mod ports;
mod protocol;
mod routes;
mod sender;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use deskdash_common::ConfigError;
use deskdash_config::DeskdashConfig;
use tracing_subscriber::EnvFilter;

use crate::hub::Hub;
use crate::routes::{router, RelayState};

#[derive(Parser)]
#[command(name = "deskdash-relay", version, about = "Webhook relay for the deskdash dashboard")]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to listen on (skips auto-discovery).
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Post test webhook requests to a running relay.
    Send {
        /// Target webhook URL.
        url: String,

        /// Number of requests.
        #[arg(short, long, default_value_t = 3)]
        count: u32,

        /// Seconds between requests.
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,
    },
}

fn load_config(path: Option<&Path>) -> Result<DeskdashConfig, ConfigError> {
    match path {
        Some(path) => deskdash_config::load_config_from(path),
        None => deskdash_config::load_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let loaded = load_config(args.config.as_deref());

    let directive = loaded
        .as_ref()
        .map(|c| c.logging.directive("deskdash_relay"))
        .unwrap_or_else(|_| "deskdash_relay=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DeskdashConfig::default()
    });
    if let Some(port) = args.port {
        config.relay.port = port;
    }

    let code = match args.command {
        Some(Command::Send {
            url,
            count,
            interval_secs,
        }) => match sender::send_test_requests(&url, count, Duration::from_secs(interval_secs))
            .await
        {
            Ok(_) => 0,
            Err(e) => {
                tracing::error!("Send failed: {e}");
                1
            }
        },
        None => match serve(config).await {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!("Relay failed: {e}");
                1
            }
        },
    };

    std::process::exit(code);
}

async fn serve(config: DeskdashConfig) -> deskdash_common::Result<()> {
    let relay = config.relay;
    let workdir = PathBuf::from(".");

    let (listener, port) = ports::bind_listener(&relay).await?;
    let hub = Hub::new(relay.channel_capacity as usize);

    let (port_file, _) = ports::port_file_paths(&workdir, &relay);
    if let Err(e) = ports::write_port_files(&workdir, &relay, port) {
        tracing::warn!("Could not write port files: {e}");
    }

    tracing::info!("deskdash-relay listening on {}:{}", relay.host, port);
    tracing::info!("  Webhook:  http://localhost:{port}/api/webhook/{{endpoint}}");
    tracing::info!("  Health:   http://localhost:{port}/health");
    tracing::info!("  Status:   http://localhost:{port}/status");
    tracing::info!("  Push:     ws://localhost:{port}/ws");
    tracing::info!(
        "  Try: curl -X POST http://localhost:{port}/api/webhook/test123 \
         -H \"Content-Type: application/json\" -d '{{\"message\": \"Hello from curl!\"}}'"
    );

    if relay.heartbeat_secs > 0 {
        let hub = hub.clone();
        let every = Duration::from_secs(relay.heartbeat_secs);
        let dashboard_port = relay.dashboard_port;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                tracing::info!(
                    subscribers = hub.subscriber_count(),
                    received = hub.received(),
                    "Relay still running on port {port} (dashboard on {dashboard_port})"
                );
            }
        });
    }

    let state = RelayState {
        hub,
        webhook_port: port,
        dashboard_port: relay.dashboard_port,
        port_file,
    };
    let app = router(state, &relay.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down relay");
        })
        .await?;

    ports::remove_port_file(&workdir, &relay);
    tracing::info!("Shutdown complete");
    Ok(())
}
