// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort webhook notifications for new inquiries.
//!
//! A new-inquiry notification is posted to a Discord-compatible webhook after
//! a successful insert. Delivery is fire-and-forget: failures are logged and
//! never affect the intake response, and an unconfigured webhook URL is a
//! silent no-op.

pub mod webhook;

pub use webhook::WebhookNotifier;
