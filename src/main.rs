#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod notifier;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use fleetsite_core::{init_logging, SiteConfig};

/// Global site configuration, loaded once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (loaded from disk or defaults)
pub fn get_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Default config location: `<config dir>/fleetsite/config.json`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fleetsite")
        .join("config.json")
}

/// Fleetsite - aviation fleet landing page
#[derive(Parser, Debug)]
#[command(name = "fleetsite-desktop")]
#[command(about = "Fleetsite - charter fleet landing page with interactive behaviors")]
struct Args {
    /// Path to a JSON config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the JSONL session journal
    #[arg(short, long)]
    journal_dir: Option<PathBuf>,

    /// Log filter directive, overrides RUST_LOG and the config file
    #[arg(short, long)]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    // An explicit --config must exist; the default path may be absent
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let loaded = if args.config.is_some() {
        SiteConfig::load(&config_path)
    } else {
        SiteConfig::load_or_default(Some(config_path.as_path()))
    };

    // Logging is configured from the file, so this failure goes to stderr
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load config {:?}, using defaults: {}", config_path, e);
        SiteConfig::default()
    });

    if let Some(filter) = args.log_filter {
        config.logging.filter = Some(filter);
    }
    if let Some(dir) = args.journal_dir {
        config.logging.journal_dir = Some(dir);
    }

    let session = ulid::Ulid::new().to_string();
    match init_logging(&config.logging, &session) {
        Ok(Some(journal)) => tracing::info!(session = %session, journal = ?journal, "Journal enabled"),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    tracing::info!(session = %session, config = ?config_path, "Starting Fleetsite");

    let _ = SITE_CONFIG.set(config);

    // Desktop-sized window; narrow it below 768px to get the burger menu
    let window_width = 1200.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Fleetsite")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
