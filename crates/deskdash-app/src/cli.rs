use std::path::PathBuf;

use clap::Parser;

/// deskdash: a terminal dashboard of virtual windows with a live webhook feed.
#[derive(Parser, Debug)]
#[command(name = "deskdash", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Visible-window cap override.
    #[arg(long)]
    pub max_visible: Option<u32>,

    /// Push channel URL of the relay (skips port probing).
    #[arg(long)]
    pub relay_url: Option<String>,

    /// Do not connect to a relay.
    #[arg(long)]
    pub no_relay: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
