// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure derived state for the admin dashboard.
//!
//! The admin client fetches the full inquiry list once and computes counts
//! and filtered views locally; there is no server-side filter parameter.

use std::str::FromStr;

use crate::types::{Inquiry, InquiryStatus};

/// Counts of inquiries by status, plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub contacted: usize,
    pub completed: usize,
}

/// Dashboard filter: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(InquiryStatus),
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        InquiryStatus::from_str(s)
            .map(Self::Only)
            .map_err(|_| format!("unknown status filter `{s}` (expected all|pending|contacted|completed)"))
    }
}

/// Count inquiries by status.
pub fn status_counts(inquiries: &[Inquiry]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: inquiries.len(),
        ..StatusCounts::default()
    };
    for inquiry in inquiries {
        match inquiry.status {
            InquiryStatus::Pending => counts.pending += 1,
            InquiryStatus::Contacted => counts.contacted += 1,
            InquiryStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

/// Apply a status filter over an already-fetched list, preserving order.
pub fn filter_by_status(inquiries: &[Inquiry], filter: StatusFilter) -> Vec<&Inquiry> {
    inquiries
        .iter()
        .filter(|i| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => i.status == status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(id: &str, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: id.to_string(),
            name: "홍길동".into(),
            phone: "010-1234-5678".into(),
            message: "문의".into(),
            status,
            created_at: "2026-08-25T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn counts_by_status() {
        let list = vec![
            inquiry("a", InquiryStatus::Pending),
            inquiry("b", InquiryStatus::Pending),
            inquiry("c", InquiryStatus::Contacted),
            inquiry("d", InquiryStatus::Completed),
        ];
        let counts = status_counts(&list);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.contacted, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn counts_of_empty_list_are_zero() {
        assert_eq!(status_counts(&[]), StatusCounts::default());
    }

    #[test]
    fn filter_all_keeps_order() {
        let list = vec![
            inquiry("a", InquiryStatus::Pending),
            inquiry("b", InquiryStatus::Contacted),
        ];
        let filtered = filter_by_status(&list, StatusFilter::All);
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn filter_only_matches_one_status() {
        let list = vec![
            inquiry("a", InquiryStatus::Pending),
            inquiry("b", InquiryStatus::Contacted),
            inquiry("c", InquiryStatus::Pending),
        ];
        let filtered = filter_by_status(&list, StatusFilter::Only(InquiryStatus::Pending));
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filter_parses_from_cli_strings() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "contacted".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(InquiryStatus::Contacted)
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}
