// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the inquiry REST API.
//!
//! Handles POST/GET/PATCH/DELETE /api/inquiry and GET /health. Validation
//! errors are detected before any side effect; datastore failures map to a
//! localized generic 500 with the cause logged server-side only.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::error;

use munui_core::validate::{validate_submission, ValidationError};
use munui_core::{Inquiry, InquiryStatus};
use munui_storage::queries::inquiries;

use crate::auth::require_admin;
use crate::messages;
use crate::server::AppState;

/// Request body for POST /api/inquiry.
#[derive(Debug, Deserialize)]
pub struct CreateInquiryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for POST /api/inquiry.
#[derive(Debug, Serialize)]
pub struct CreateInquiryResponse {
    pub success: bool,
    pub message: String,
    /// Datastore-assigned id of the new inquiry.
    pub id: String,
}

/// One inquiry as rendered on the wire. `created_at` is camel-cased for
/// client compatibility.
#[derive(Debug, Serialize)]
pub struct InquiryJson {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub status: InquiryStatus,
}

impl From<Inquiry> for InquiryJson {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            name: inquiry.name,
            phone: inquiry.phone,
            message: inquiry.message,
            created_at: inquiry.created_at,
            status: inquiry.status,
        }
    }
}

/// Response body for GET /api/inquiry.
#[derive(Debug, Serialize)]
pub struct InquiryListResponse {
    pub inquiries: Vec<InquiryJson>,
}

/// Request body for PATCH /api/inquiry.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for DELETE /api/inquiry.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// Generic success acknowledgement with a localized message.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short localized error description.
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /api/inquiry (public intake)
///
/// Validates the submission, persists it with `status = pending`, then fires
/// the webhook notification without awaiting it.
pub async fn post_inquiry(
    State(state): State<AppState>,
    Json(body): Json<CreateInquiryRequest>,
) -> Response {
    let name = body.name.unwrap_or_default();
    let phone = body.phone.unwrap_or_default();
    let message = body.message.unwrap_or_default();

    let new = match validate_submission(&name, &phone, &message) {
        Ok(new) => new,
        Err(ValidationError::MissingFields) => return bad_request(messages::MISSING_FIELDS),
        Err(ValidationError::InvalidPhone) => return bad_request(messages::INVALID_PHONE),
    };

    match inquiries::create(&state.db, new).await {
        Ok(inquiry) => {
            // Detached best-effort dispatch; the response does not wait on it.
            state
                .notifier
                .dispatch(inquiry.name, inquiry.phone, inquiry.message);
            (
                StatusCode::OK,
                Json(CreateInquiryResponse {
                    success: true,
                    message: messages::INQUIRY_RECEIVED.to_string(),
                    id: inquiry.id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to save inquiry");
            internal_error(messages::SAVE_FAILED)
        }
    }
}

/// GET /api/inquiry (admin)
///
/// Returns all inquiries, newest first.
pub async fn get_inquiries(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Err(response) = require_admin(&state.auth, &jar) {
        return response;
    }

    match inquiries::list(&state.db).await {
        Ok(listed) => Json(InquiryListResponse {
            inquiries: listed.into_iter().map(InquiryJson::from).collect(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "failed to list inquiries");
            internal_error(messages::LIST_FAILED)
        }
    }
}

/// PATCH /api/inquiry (admin)
///
/// Updates the status of one inquiry. The status string is parsed into the
/// enum before any datastore call; a missing id matches zero rows and still
/// reports success.
pub async fn patch_inquiry(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<UpdateStatusRequest>,
) -> Response {
    if let Err(response) = require_admin(&state.auth, &jar) {
        return response;
    }

    let (Some(id), Some(status)) = (body.id, body.status) else {
        return bad_request(messages::UPDATE_MISSING_FIELDS);
    };
    if id.is_empty() || status.is_empty() {
        return bad_request(messages::UPDATE_MISSING_FIELDS);
    }

    let Ok(status) = status.parse::<InquiryStatus>() else {
        return bad_request(messages::INVALID_STATUS);
    };

    match inquiries::update_status(&state.db, &id, status).await {
        Ok(()) => Json(AckResponse {
            success: true,
            message: messages::STATUS_UPDATED.to_string(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, inquiry_id = %id, "failed to update inquiry status");
            internal_error(messages::UPDATE_FAILED)
        }
    }
}

/// DELETE /api/inquiry?id= (admin)
///
/// Deletes one inquiry. Deleting a missing id is a success (idempotent).
pub async fn delete_inquiry(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<DeleteParams>,
) -> Response {
    if let Err(response) = require_admin(&state.auth, &jar) {
        return response;
    }

    let Some(id) = params.id.filter(|id| !id.is_empty()) else {
        return bad_request(messages::DELETE_MISSING_ID);
    };

    match inquiries::delete(&state.db, &id).await {
        Ok(()) => Json(AckResponse {
            success: true,
            message: messages::INQUIRY_DELETED.to_string(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, inquiry_id = %id, "failed to delete inquiry");
            internal_error(messages::DELETE_FAILED)
        }
    }
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
