// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the munui inquiry service.
//!
//! Provides the domain types shared across the workspace: the `Inquiry`
//! record and its status enum, the common error type, intake validation,
//! and the pure functions backing the admin dashboard.

pub mod dashboard;
pub mod error;
pub mod types;
pub mod validate;

// Re-export key items at crate root for ergonomic imports.
pub use error::MunuiError;
pub use types::{Inquiry, InquiryStatus, NewInquiry};
pub use validate::{validate_submission, ValidationError};
