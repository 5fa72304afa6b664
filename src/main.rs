//! Payments Grid - Main Entry Point
//!
//! Desktop demo of the debounced data grid over a simulated payments API.

use data_grid::app::run_app;
use data_grid::config::GridConfig;
use data_grid::helpers::is_development;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting payments grid...");

    let config = GridConfig::load_or_default();
    tracing::debug!(?config, "Grid config loaded");

    run_app(config);
}
