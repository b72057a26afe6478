// tabsift - regex-filtered tab workspace for the terminal
//
// A filter bar accepts keyboard input; tab groups (button + content pane)
// are shown or hidden by matching their names against the space-separated
// regex terms typed into the bar.
//
// Architecture:
// - filter: the widget core (registry, pattern compilation, key boundary,
//   persistence collaborator) - pure and UI-agnostic
// - tui (ratatui): thin adapter applying group visibility to the terminal
// - config/cli: TOML config with env overrides, clap subcommands
// - logging: tracing captured to an in-memory buffer so the TUI stays clean

mod cli;
mod config;
mod demo;
mod filter;
mod logging;
mod tabs;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, LogRotation};
use filter::store::{FilterStore, NullFilterStore, StateFileStore};
use filter::{TabFilter, TabRegistry};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --path)
    // If a command was handled, exit early
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if let Some(tabs) = cli.tabs {
        config.tabs_file = Some(tabs);
    }

    // Create log buffer for the TUI
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging
    // Logs are captured to the buffer (prevents garbling the display);
    // optionally also written to rotating JSON log files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("tabsift={}", config.logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure
    // file logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();

            None
        };

    // Load tab declarations: --tabs / TABSIFT_TABS / config, demo otherwise
    let specs = match &config.tabs_file {
        Some(path) => tabs::load_tabs(path)?,
        None => {
            tracing::info!("no tabs file configured, using the demo workspace");
            demo::demo_tabs()
        }
    };

    // Malformed tab ids fail here, before the terminal is touched
    let registry = TabRegistry::build(&specs).context("invalid tab definitions")?;
    tracing::debug!("registry built with {} tab groups", registry.len());

    // Persistence collaborator: state file, or a no-op when disabled
    let store: Box<dyn FilterStore> = if config.features.persist_filter {
        Box::new(StateFileStore::new(config.state_path.clone()))
    } else {
        Box::new(NullFilterStore)
    };

    let mut tab_filter = TabFilter::new(registry, store);

    // Restore the persisted filter; the widget itself has no read path, so
    // the application feeds it back through the public update entry point
    let initial = if config.features.persist_filter {
        StateFileStore::load_filter(&config.state_path).unwrap_or_default()
    } else {
        String::new()
    };
    tab_filter.set_filter(&initial);

    let theme = tui::theme::Theme::by_name(&config.theme);
    let mut app = tui::app::App::new(tab_filter, log_buffer, theme);

    tracing::info!("Starting TUI");
    tui::run_tui(&mut app).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
