// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CRUD operations for the inquiries table.
//!
//! Every mutation is a single-row statement; the database provides the
//! atomicity, not this layer. Updates and deletes that match zero rows are
//! reported as success.

use munui_core::{Inquiry, InquiryStatus, MunuiError, NewInquiry};
use rusqlite::params;
use uuid::Uuid;

use crate::database::{map_tr_err, Database};

/// Insert a new inquiry with `status = pending` and a server-assigned id and
/// timestamp. Returns the full persisted record.
pub async fn create(db: &Database, new: NewInquiry) -> Result<Inquiry, MunuiError> {
    let id = Uuid::new_v4().to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO inquiries (id, name, phone, message, status)
                 VALUES (?1, ?2, ?3, ?4, 'pending')",
                params![id, new.name, new.phone, new.message],
            )?;
            // Read the row back so the caller gets the datastore-assigned
            // created_at (and can report the new id).
            let inquiry = conn.query_row(
                "SELECT id, name, phone, message, status, created_at
                 FROM inquiries WHERE id = ?1",
                params![id],
                row_to_inquiry,
            )?;
            Ok(inquiry)
        })
        .await
        .map_err(map_tr_err)
}

/// List all inquiries, newest first.
///
/// Unbounded on purpose: this serves a single small-business inbox. The
/// rowid tie-break keeps same-millisecond inserts deterministic.
pub async fn list(db: &Database) -> Result<Vec<Inquiry>, MunuiError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, phone, message, status, created_at
                 FROM inquiries
                 ORDER BY created_at DESC, rowid DESC",
            )?;
            let rows = stmt
                .query_map([], row_to_inquiry)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
        .await
        .map_err(map_tr_err)
}

/// Update the status of one inquiry.
///
/// Status validity is guaranteed by the type: only a parsed
/// [`InquiryStatus`] reaches this function, so no invalid value can hit the
/// datastore. A missing id matches zero rows and still reports success.
pub async fn update_status(
    db: &Database,
    id: &str,
    status: InquiryStatus,
) -> Result<(), MunuiError> {
    let id = id.to_string();
    let status = status.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE inquiries SET status = ?1 WHERE id = ?2",
                params![status, id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Delete one inquiry by id. Deleting a missing id is a success (idempotent).
pub async fn delete(db: &Database, id: &str) -> Result<(), MunuiError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM inquiries WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

fn row_to_inquiry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Inquiry> {
    let status: String = row.get(4)?;
    let status = status.parse::<InquiryStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Inquiry {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        message: row.get(3)?,
        status,
        created_at: row.get(5)?,
    })
}
