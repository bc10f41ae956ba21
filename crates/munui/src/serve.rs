// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `munui serve` command implementation.
//!
//! Opens the SQLite datastore, builds the webhook notifier and auth gate
//! from config, and runs the gateway until a shutdown signal arrives.

use std::time::Instant;

use munui_config::model::MunuiConfig;
use munui_core::MunuiError;
use munui_gateway::{start_server, AppState, AuthConfig};
use munui_notify::WebhookNotifier;
use munui_storage::Database;
use tracing::{info, warn};

/// Runs the `munui serve` command.
pub async fn run_serve(config: MunuiConfig) -> Result<(), MunuiError> {
    init_tracing(&config.server.log_level);

    info!("starting munui serve");

    let db = Database::open(&config.storage.database_path).await?;
    let notifier = WebhookNotifier::new(&config.notify)?;

    let state = AppState {
        db: db.clone(),
        notifier,
        auth: AuthConfig {
            password: config.admin.password.clone(),
            secure_cookies: config.server.secure_cookies,
        },
        start_time: Instant::now(),
    };

    let served = start_server(&config.server, state).await;

    if let Err(e) = db.close().await {
        warn!(error = %e, "failed to close database cleanly");
    }

    served
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("munui={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
