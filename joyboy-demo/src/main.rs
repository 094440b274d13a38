//! joyboy demo - desktop window showing anchored menus at every edge
//!
//! Handy for eyeballing placement: the corner handles force the panel to
//! flip above the handle and to pin against the right edge of the window.

mod demo;

use clap::Parser;
use joyboy_common::{Config, ThemeMode};
use std::path::PathBuf;
use tracing::{error, info};

/// Desktop demo for the anchored menu components.
#[derive(Parser)]
#[command(name = "joyboy-demo")]
struct Args {
    /// YAML config file. Defaults to ./config.yaml when present.
    #[arg(long, env = "JOYBOY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured theme (light or dark).
    #[arg(long)]
    theme: Option<ThemeMode>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let args = Args::parse();
    configure_logging();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    info!(theme = ?config.theme, "Launching demo");
    demo::launch(config);
}
