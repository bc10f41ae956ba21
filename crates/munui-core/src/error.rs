// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the munui inquiry service.

use thiserror::Error;

/// The primary error type used across the munui workspace.
///
/// User-facing HTTP responses never carry these directly; handlers map
/// storage failures to a localized generic message and log the cause.
#[derive(Debug, Error)]
pub enum MunuiError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Datastore errors (connection, migration, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Webhook notification errors. Swallowed and logged by the notifier,
    /// never surfaced to the intake caller.
    #[error("notify error: {message}")]
    Notify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
