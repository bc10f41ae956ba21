// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the munui inquiry service.
//!
//! Exposes the public intake endpoint, the admin inquiry CRUD endpoints, and
//! the cookie-based admin auth gate. Admin list/update/delete verify the
//! session cookie server-side; only the intake POST is public.

pub mod auth;
pub mod handlers;
pub mod messages;
pub mod server;

pub use auth::AuthConfig;
pub use server::{build_router, start_server, AppState};
