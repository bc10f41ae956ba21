// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Munui - contact inquiry service.
//!
//! Binary entry point: serves the inquiry gateway and provides an admin
//! client for a running instance.

use clap::{Parser, Subcommand};

mod admin;
mod serve;
mod status;

/// Munui - contact inquiry service.
#[derive(Parser, Debug)]
#[command(name = "munui", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the inquiry gateway server.
    Serve,
    /// Show whether a gateway is running and its uptime.
    Status {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Manage inquiries on a running gateway.
    Admin {
        /// Gateway base URL (defaults to the configured host and port).
        #[arg(long)]
        server: Option<String>,
        #[command(subcommand)]
        command: admin::AdminCommand,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match munui_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            munui_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) | None => serve::run_serve(config).await,
        Some(Commands::Status { json, plain }) => status::run_status(&config, json, plain).await,
        Some(Commands::Admin { server, command }) => {
            admin::run_admin(&config, server, command).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config =
            munui_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.server.port, 8323);
    }
}
