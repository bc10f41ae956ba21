// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the inquiry API.

use axum::{
    routing::{get, post},
    Router,
};
use munui_config::model::ServerConfig;
use munui_core::MunuiError;
use munui_notify::WebhookNotifier;
use munui_storage::Database;
use tower_http::cors::CorsLayer;

use crate::auth::{self, AuthConfig};
use crate::handlers;

/// Shared state for axum request handlers.
///
/// Read-only after initialization; handlers receive it as an injected
/// dependency rather than an ambient global.
#[derive(Clone)]
pub struct AppState {
    /// Datastore handle.
    pub db: Database,
    /// Webhook notifier (no-ops when unconfigured).
    pub notifier: WebhookNotifier,
    /// Auth gate configuration.
    pub auth: AuthConfig,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Build the gateway router.
///
/// Routes:
/// - `GET  /health` (public)
/// - `POST /api/inquiry` (public intake)
/// - `GET/PATCH/DELETE /api/inquiry` (admin; handlers verify the session cookie)
/// - `POST/GET/DELETE /api/admin/auth` (auth gate)
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route(
            "/api/inquiry",
            post(handlers::post_inquiry)
                .get(handlers::get_inquiries)
                .patch(handlers::patch_inquiry)
                .delete(handlers::delete_inquiry),
        )
        .route(
            "/api/admin/auth",
            post(auth::post_login)
                .get(auth::get_session)
                .delete(auth::delete_session),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until a shutdown signal arrives.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), MunuiError> {
    if state.auth.password.is_none() {
        tracing::warn!(
            "no admin password configured -- admin login is disabled (set admin.password)"
        );
    }
    if !state.notifier.is_configured() {
        tracing::info!("no webhook URL configured -- new-inquiry notifications disabled");
    }

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MunuiError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MunuiError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler; serving without graceful shutdown");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_is_clone() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let state = AppState {
            db,
            notifier: WebhookNotifier::new(&munui_config::model::NotifyConfig::default())
                .unwrap(),
            auth: AuthConfig {
                password: None,
                secure_cookies: false,
            },
            start_time: std::time::Instant::now(),
        };
        let _cloned = state.clone();
    }
}
