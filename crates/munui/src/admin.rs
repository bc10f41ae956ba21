// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `munui admin` command implementation.
//!
//! Terminal client for the admin endpoints of a running gateway. Logs in
//! with the admin password (prompted, or taken from `MUNUI_ADMIN_PASSWORD`),
//! holds the session cookie in an in-memory cookie store, and drives the
//! list / set-status / delete operations over HTTP.

use std::io::IsTerminal;
use std::time::Duration;

use clap::Subcommand;
use colored::Colorize;
use munui_config::model::MunuiConfig;
use munui_core::dashboard::{filter_by_status, status_counts, StatusFilter};
use munui_core::{Inquiry, InquiryStatus, MunuiError};
use serde::Deserialize;

/// Inquiry management subcommands.
#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// List inquiries, newest first.
    List {
        /// Show only one status: pending, contacted, or completed.
        #[arg(long)]
        status: Option<String>,
    },
    /// Set the status of one inquiry.
    SetStatus {
        /// Inquiry id.
        id: String,
        /// New status: pending, contacted, or completed.
        status: String,
    },
    /// Delete one inquiry.
    Delete {
        /// Inquiry id.
        id: String,
    },
}

/// One inquiry as the gateway renders it on the wire.
#[derive(Debug, Deserialize)]
struct InquiryRow {
    id: String,
    name: String,
    phone: String,
    message: String,
    #[serde(rename = "createdAt")]
    created_at: String,
    status: InquiryStatus,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    inquiries: Vec<InquiryRow>,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    success: bool,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AuthStatusResponse {
    authenticated: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Run the `munui admin` command against a running gateway.
pub async fn run_admin(
    config: &MunuiConfig,
    server: Option<String>,
    command: AdminCommand,
) -> Result<(), MunuiError> {
    let base = server.unwrap_or_else(|| {
        format!("http://{}:{}", config.server.host, config.server.port)
    });
    let base = base.trim_end_matches('/').to_string();

    let client = reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| MunuiError::Internal(format!("failed to create HTTP client: {e}")))?;

    login(&client, &base).await?;

    match command {
        AdminCommand::List { status } => {
            let filter = match status {
                Some(ref s) => s.parse::<StatusFilter>().map_err(|_| {
                    MunuiError::Internal(format!(
                        "unknown status filter {s:?} (expected pending, contacted, or completed)"
                    ))
                })?,
                None => StatusFilter::All,
            };
            run_list(&client, &base, filter).await
        }
        AdminCommand::SetStatus { id, status } => {
            let status = status.parse::<InquiryStatus>().map_err(|_| {
                MunuiError::Internal(format!(
                    "unknown status {status:?} (expected pending, contacted, or completed)"
                ))
            })?;
            run_set_status(&client, &base, &id, status).await
        }
        AdminCommand::Delete { id } => run_delete(&client, &base, &id).await,
    }
}

/// Establish an admin session, prompting for the password if needed.
async fn login(client: &reqwest::Client, base: &str) -> Result<(), MunuiError> {
    let resp = client
        .get(format!("{base}/api/admin/auth"))
        .send()
        .await
        .map_err(|e| MunuiError::Internal(format!("gateway unreachable at {base}: {e}")))?;
    let auth: AuthStatusResponse = resp
        .json()
        .await
        .map_err(|e| MunuiError::Internal(format!("failed to parse auth response: {e}")))?;
    if auth.authenticated {
        return Ok(());
    }

    let password = match std::env::var("MUNUI_ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => rpassword::prompt_password("admin password: ")
            .map_err(|e| MunuiError::Internal(format!("failed to read password: {e}")))?,
    };

    let resp = client
        .post(format!("{base}/api/admin/auth"))
        .json(&serde_json::json!({ "password": password }))
        .send()
        .await
        .map_err(|e| MunuiError::Internal(format!("login request failed: {e}")))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(remote_error(resp, "login rejected").await)
    }
}

/// Turn a non-success gateway response into an error carrying the server's
/// localized message when one is present.
async fn remote_error(resp: reqwest::Response, context: &str) -> MunuiError {
    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => MunuiError::Internal(format!("{context}: {} ({status})", body.error)),
        Err(_) => MunuiError::Internal(format!("{context}: HTTP {status}")),
    }
}

async fn run_list(
    client: &reqwest::Client,
    base: &str,
    filter: StatusFilter,
) -> Result<(), MunuiError> {
    let resp = client
        .get(format!("{base}/api/inquiry"))
        .send()
        .await
        .map_err(|e| MunuiError::Internal(format!("list request failed: {e}")))?;
    if !resp.status().is_success() {
        return Err(remote_error(resp, "list failed").await);
    }

    let listed: ListResponse = resp
        .json()
        .await
        .map_err(|e| MunuiError::Internal(format!("failed to parse inquiry list: {e}")))?;
    let inquiries: Vec<Inquiry> = listed.inquiries.into_iter().map(Inquiry::from).collect();

    let use_color = std::io::stdout().is_terminal();
    let counts = status_counts(&inquiries);

    println!();
    println!(
        "  inquiries: {} total ({} pending, {} contacted, {} completed)",
        counts.total, counts.pending, counts.contacted, counts.completed
    );
    println!("  {}", "-".repeat(72));

    for inquiry in filter_by_status(&inquiries, filter) {
        let status = render_status(inquiry.status, use_color);
        println!(
            "  {}  {}  {}  {}",
            inquiry.id, status, inquiry.created_at, inquiry.name
        );
        println!("      {}  {}", inquiry.phone, inquiry.message);
    }
    println!();

    Ok(())
}

fn render_status(status: InquiryStatus, use_color: bool) -> String {
    let label = format!("{status:>9}");
    if !use_color {
        return label;
    }
    match status {
        InquiryStatus::Pending => label.yellow().to_string(),
        InquiryStatus::Contacted => label.cyan().to_string(),
        InquiryStatus::Completed => label.green().to_string(),
    }
}

async fn run_set_status(
    client: &reqwest::Client,
    base: &str,
    id: &str,
    status: InquiryStatus,
) -> Result<(), MunuiError> {
    let resp = client
        .patch(format!("{base}/api/inquiry"))
        .json(&serde_json::json!({ "id": id, "status": status.to_string() }))
        .send()
        .await
        .map_err(|e| MunuiError::Internal(format!("update request failed: {e}")))?;
    if !resp.status().is_success() {
        return Err(remote_error(resp, "update failed").await);
    }

    let ack: AckResponse = resp
        .json()
        .await
        .map_err(|e| MunuiError::Internal(format!("failed to parse update response: {e}")))?;
    if ack.success {
        println!("{id} -> {status}: {}", ack.message);
    }
    Ok(())
}

async fn run_delete(client: &reqwest::Client, base: &str, id: &str) -> Result<(), MunuiError> {
    let resp = client
        .delete(format!("{base}/api/inquiry"))
        .query(&[("id", id)])
        .send()
        .await
        .map_err(|e| MunuiError::Internal(format!("delete request failed: {e}")))?;
    if !resp.status().is_success() {
        return Err(remote_error(resp, "delete failed").await);
    }

    let ack: AckResponse = resp
        .json()
        .await
        .map_err(|e| MunuiError::Internal(format!("failed to parse delete response: {e}")))?;
    if ack.success {
        println!("{id}: {}", ack.message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_row_accepts_camel_cased_created_at() {
        let json = r#"{
            "id": "abc",
            "name": "홍길동",
            "phone": "010-1234-5678",
            "message": "문의",
            "createdAt": "2026-08-25T00:00:00.000Z",
            "status": "contacted"
        }"#;
        let row: InquiryRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.created_at, "2026-08-25T00:00:00.000Z");
        assert_eq!(row.status, InquiryStatus::Contacted);

        let inquiry = Inquiry::from(row);
        assert_eq!(inquiry.id, "abc");
    }

    #[test]
    fn render_status_plain_is_fixed_width() {
        for status in [
            InquiryStatus::Pending,
            InquiryStatus::Contacted,
            InquiryStatus::Completed,
        ] {
            assert_eq!(render_status(status, false).len(), 9);
        }
    }
}
