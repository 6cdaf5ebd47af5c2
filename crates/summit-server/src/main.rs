//! Summit HTTP server
//!
//! Binds the configured address and serves the goal API until interrupted.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use summit_core::GoalTrackerBuilder;
use summit_server::{serve, shutdown_signal, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args {
        host,
        port,
        data_file,
    } = Args::parse();

    let tracker = GoalTrackerBuilder::new()
        .with_data_file(Some(&data_file))
        .build()
        .await
        .context("Failed to initialize goal tracker")?;

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    info!(
        "Server running on http://{addr} (data file: {})",
        tracker.data_file().display()
    );

    serve(listener, AppState::new(tracker), shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}
