mod activity;
mod app_state;
mod cli;
mod commands;
mod port_probe;
mod relay_client;
mod render;

use std::io::Write;
use std::time::Duration;

use deskdash_config::DeskdashConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app_state::{DeskdashApp, Outcome};
use crate::relay_client::{RelayClientConfig, RelayEvent};

fn print(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

fn load_config(args: &cli::Args) -> Result<DeskdashConfig, deskdash_common::ConfigError> {
    match &args.config {
        Some(path) => deskdash_config::load_config_from(path),
        None => deskdash_config::load_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    let loaded = load_config(&args);

    // Logging goes to stderr so stdout stays the rendered dashboard.
    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.directive("deskdash"),
        Err(_) => "deskdash=info".into(),
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_directive)),
        )
        .init();

    tracing::info!("deskdash v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DeskdashConfig::default()
    });
    if let Some(max_visible) = args.max_visible {
        config.windows.max_visible = max_visible;
    }

    let mut app = DeskdashApp::new(&config);

    // Event bus subscribers only log for now.
    let mut bus_rx = app.event_bus().subscribe();
    tokio::spawn(async move {
        while let Ok(event) = bus_rx.recv().await {
            tracing::debug!(?event, "Event");
        }
    });

    let (relay_tx, mut relay_rx) = mpsc::channel::<RelayEvent>(256);
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    let relay_task = if args.no_relay {
        drop(relay_tx);
        None
    } else {
        let relay_config = RelayClientConfig {
            host: config.activity.relay_host.clone(),
            probe_ports: config.activity.probe_start..=config.activity.probe_end,
            probe_interval: Duration::from_secs(config.activity.probe_interval_secs),
            url: args.relay_url.clone(),
        };
        Some(tokio::spawn(relay_client::run_relay_client(
            relay_config,
            relay_tx,
            shutdown_rx,
        )))
    };

    print(&app.render_desktop());
    print("Type `help` for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => match app.handle_line(&line).await {
                        Outcome::Output(text) => print(&text),
                        Outcome::Quit => break,
                    },
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!("stdin read failed: {e}");
                        break;
                    }
                }
            }

            Some(event) = relay_rx.recv() => {
                if let Some(notice) = app.apply_relay_event(event) {
                    print(&notice);
                }
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    let _ = shutdown_tx.send(()).await;
    if let Some(task) = relay_task {
        let _ = tokio::time::timeout(Duration::from_secs(2), task).await;
    }
    tracing::info!("Shutdown complete");
}
