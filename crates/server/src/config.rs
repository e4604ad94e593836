// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line and environment configuration.
//!
//! Every flag can also be set through the environment, and a `.env` file in
//! the working directory is loaded before parsing.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tally_core::id::validate_prefix;

/// tally-server: Issue tracker REST API and dashboard reports
#[derive(Parser, Debug, Clone)]
#[command(name = "tally-server", version)]
#[command(about = "Issue tracker REST API serving dashboard chart reports")]
pub struct Args {
    /// Address to bind the server to
    #[arg(long, env = "TALLY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Path of the SQLite database file
    #[arg(short, long, env = "TALLY_DATABASE", default_value = "tally.db")]
    pub database: PathBuf,

    /// Prefix for generated issue IDs
    #[arg(long, env = "TALLY_ID_PREFIX", default_value = "iss", value_parser = parse_prefix)]
    pub id_prefix: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The socket address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log filter: `RUST_LOG` when set, otherwise `info` (`debug` with --verbose).
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if self.verbose { "debug" } else { "info" })
        })
    }
}

fn parse_prefix(value: &str) -> Result<String, String> {
    if validate_prefix(value) {
        Ok(value.to_string())
    } else {
        Err(tally_core::Error::InvalidPrefix(value.to_string()).to_string())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
