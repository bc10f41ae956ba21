// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intake validation for contact-form submissions.
//!
//! Validation runs before any side effect: presence/trim checks first, then
//! the phone format check. Name and message content are not constrained
//! beyond non-emptiness.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::NewInquiry;

/// Digits and hyphens, 10 to 14 characters, applied after removing all
/// whitespace from the submitted phone number.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9-]{10,14}$").unwrap());

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of name/phone/message is missing or blank.
    MissingFields,
    /// The phone number does not match the accepted pattern.
    InvalidPhone,
}

/// Validate a raw submission and return the trimmed fields ready for insert.
///
/// The phone format check runs on a whitespace-stripped copy; the stored
/// value keeps its internal formatting (only leading/trailing whitespace is
/// trimmed), matching what the submitter typed.
pub fn validate_submission(
    name: &str,
    phone: &str,
    message: &str,
) -> Result<NewInquiry, ValidationError> {
    let name = name.trim();
    let phone = phone.trim();
    let message = message.trim();

    if name.is_empty() || phone.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&compact) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(NewInquiry {
        name: name.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_korean_mobile_number() {
        let new = validate_submission("홍길동", "010-1234-5678", "상담 문의드립니다").unwrap();
        assert_eq!(new.name, "홍길동");
        assert_eq!(new.phone, "010-1234-5678");
    }

    #[test]
    fn trims_all_fields() {
        let new = validate_submission("  홍길동 ", " 010-1234-5678 ", "  문의  ").unwrap();
        assert_eq!(new.name, "홍길동");
        assert_eq!(new.phone, "010-1234-5678");
        assert_eq!(new.message, "문의");
    }

    #[test]
    fn internal_whitespace_ignored_for_format_check_but_kept_out_of_storage_trim() {
        // "010 1234 5678" compacts to 11 digits -> valid; stored as typed (trimmed).
        let new = validate_submission("홍길동", "010 1234 5678", "문의").unwrap();
        assert_eq!(new.phone, "010 1234 5678");
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            validate_submission("", "010-1234-5678", "문의"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_submission("홍길동", "   ", "문의"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_submission("홍길동", "010-1234-5678", "\t\n"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn rejects_non_numeric_phone() {
        assert_eq!(
            validate_submission("홍길동", "abc", "문의"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate_submission("홍길동", "010-1234-567a", "문의"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        // 9 characters after compaction.
        assert_eq!(
            validate_submission("홍길동", "123-45-678", "문의"),
            Err(ValidationError::InvalidPhone)
        );
        // 15 characters after compaction.
        assert_eq!(
            validate_submission("홍길동", "123456789012345", "문의"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn boundary_lengths_accepted() {
        assert!(validate_submission("a", "0212345678", "b").is_ok()); // 10
        assert!(validate_submission("a", "02-1234-5678-1", "b").is_ok()); // 14
    }
}
