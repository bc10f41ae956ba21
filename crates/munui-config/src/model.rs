// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the munui inquiry service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level munui configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MunuiConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Admin authentication settings.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Webhook notification settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Mark the session cookie `Secure`. Enable behind TLS in production.
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            secure_cookies: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8323
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Admin authentication configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Shared admin password. `None` disables admin login entirely
    /// (the auth gate fails closed).
    ///
    /// Also keys the session-token MAC, so changing it invalidates
    /// outstanding sessions.
    #[serde(default)]
    pub password: Option<String>,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("munui").join("munui.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "munui.db".to_string())
}

/// Webhook notification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Discord-compatible webhook URL. `None` disables notifications.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Footer text shown on the notification embed.
    #[serde(default = "default_footer_text")]
    pub footer_text: String,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_notify_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            footer_text: default_footer_text(),
            timeout_secs: default_notify_timeout_secs(),
        }
    }
}

fn default_footer_text() -> String {
    "상담 문의".to_string()
}

fn default_notify_timeout_secs() -> u64 {
    10
}
