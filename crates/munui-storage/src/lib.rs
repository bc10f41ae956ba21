// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the munui inquiry service.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and typed CRUD operations for the
//! `inquiries` table.

pub mod database;
pub mod migrations;
pub mod queries;

pub use database::Database;
