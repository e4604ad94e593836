// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tally-server: REST API for the tally issue tracker.
//!
//! Serves issue creation, listing and resolution, plus the four chart
//! reports consumed by the dashboard, from a single SQLite database.

mod config;
mod error;
mod routes;
mod server;
mod state;

use clap::Parser;
use tracing::info;

use config::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before parsing so env-backed flags see it
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .init();

    info!("Starting tally-server");
    if let Ok(path) = dotenv {
        info!("  Environment file: {}", path.display());
    }
    info!("  Bind address: {}", args.bind_addr());
    info!("  Database: {}", args.database.display());
    info!("  ID prefix: {}", args.id_prefix);

    let state = state::AppState::open(&args.database, args.id_prefix.clone())?;

    server::run(args.bind_addr(), state, server::shutdown_signal()).await?;

    info!("tally-server stopped");
    Ok(())
}
