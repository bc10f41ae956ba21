// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for contact inquiries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Follow-up status of an inquiry.
///
/// Serialized lowercase on the wire and in the database. Parsing through
/// `FromStr` is the only path from untrusted strings into the store, so an
/// invalid status never reaches a datastore call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Newly submitted, nobody has reached out yet. Initial value at creation.
    Pending,
    /// Staff has contacted the submitter.
    Contacted,
    /// Follow-up is finished.
    Completed,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// One persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Opaque unique identifier, assigned by the storage layer at insert.
    pub id: String,
    /// Submitter name, trimmed and non-empty.
    pub name: String,
    /// Submitter phone number, trimmed and non-empty.
    pub phone: String,
    /// Inquiry body, trimmed and non-empty.
    pub message: String,
    /// Follow-up status.
    pub status: InquiryStatus,
    /// RFC 3339 UTC timestamp assigned at insertion. Sort key for listing
    /// (descending, newest first).
    pub created_at: String,
}

/// A validated submission ready to be inserted.
///
/// Produced only by [`crate::validate::validate_submission`]; all fields are
/// trimmed and non-empty, and the phone number has passed the format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&InquiryStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&InquiryStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
    }

    #[test]
    fn status_parses_lowercase_only() {
        assert_eq!(
            InquiryStatus::from_str("completed").unwrap(),
            InquiryStatus::Completed
        );
        assert!(InquiryStatus::from_str("Completed").is_err());
        assert!(InquiryStatus::from_str("archived").is_err());
        assert!(InquiryStatus::from_str("").is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(InquiryStatus::default(), InquiryStatus::Pending);
    }

    #[test]
    fn inquiry_serializes_with_snake_case_created_at() {
        let inquiry = Inquiry {
            id: "abc".into(),
            name: "홍길동".into(),
            phone: "010-1234-5678".into(),
            message: "문의".into(),
            status: InquiryStatus::Pending,
            created_at: "2026-08-25T00:00:00.000Z".into(),
        };
        let json = serde_json::to_string(&inquiry).unwrap();
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
