// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./munui.toml` > `~/.config/munui/munui.toml` > `/etc/munui/munui.toml`
//! with environment variable overrides via `MUNUI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MunuiConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/munui/munui.toml` (system-wide)
/// 3. `~/.config/munui/munui.toml` (user XDG config)
/// 4. `./munui.toml` (local directory)
/// 5. `MUNUI_*` environment variables
pub fn load_config() -> Result<MunuiConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<MunuiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MunuiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MunuiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MunuiConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MunuiConfig::default()))
        .merge(Toml::file("/etc/munui/munui.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("munui/munui.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("munui.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MUNUI_NOTIFY_WEBHOOK_URL` must map to
/// `notify.webhook_url`, not `notify.webhook.url`.
fn env_provider() -> Env {
    Env::prefixed("MUNUI_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MUNUI_STORAGE_DATABASE_PATH -> "storage_database_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("admin_", "admin.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("notify_", "notify.", 1);
        mapped.into()
    })
}
