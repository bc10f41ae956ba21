// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cookie-based admin auth gate.
//!
//! Login compares the supplied password against the configured shared secret
//! in constant time, then issues an HMAC-SHA256-signed session token carried
//! in an http-only cookie. Verification checks the signature, the `admin:`
//! payload prefix, and a 24-hour issuance age; any failure means
//! "not authenticated", never an error. When no password is configured the
//! gate fails closed.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, error};

use crate::handlers::ErrorResponse;
use crate::messages;
use crate::server::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "admin_token";

/// Literal marker prepended to the signed token payload.
const TOKEN_PREFIX: &str = "admin:";

/// Session lifetime: cookie max-age and server-side token age limit agree.
const TOKEN_MAX_AGE_SECS: i64 = 60 * 60 * 24;

type HmacSha256 = Hmac<Sha256>;

/// Authentication configuration for the gateway.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared admin password. `None` disables login (fail-closed).
    /// Also keys the session-token MAC.
    pub password: Option<String>,
    /// Mark issued cookies `Secure`.
    pub secure_cookies: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

/// Compare the supplied password against the configured secret in constant
/// time. Returns `false` when no password is configured.
pub fn verify_password(auth: &AuthConfig, supplied: &str) -> bool {
    let Some(expected) = &auth.password else {
        error!("admin password not configured -- rejecting login");
        return false;
    };
    ring::constant_time::verify_slices_are_equal(supplied.as_bytes(), expected.as_bytes())
        .is_ok()
}

/// Issue a signed session token. Returns `None` when no password is
/// configured (the gate is disabled).
pub fn issue_token(auth: &AuthConfig) -> Option<String> {
    let secret = auth.password.as_ref()?;
    let payload = format!("{TOKEN_PREFIX}{}", chrono::Utc::now().timestamp());
    let signature = sign(secret.as_bytes(), payload.as_bytes());
    Some(format!("{}.{signature}", BASE64.encode(payload.as_bytes())))
}

fn sign(key: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a session token: signature, payload prefix, and issuance age.
///
/// Any malformed input maps to `false`; this function never errors.
pub fn verify_token(auth: &AuthConfig, token: &str) -> bool {
    let Some(secret) = &auth.password else {
        return false;
    };
    let Some((payload_b64, signature_hex)) = token.split_once('.') else {
        return false;
    };
    let Ok(payload) = BASE64.decode(payload_b64) else {
        return false;
    };
    let Ok(signature) = hex::decode(signature_hex) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(&payload);
    if mac.verify_slice(&signature).is_err() {
        return false;
    }

    let Ok(payload) = std::str::from_utf8(&payload) else {
        return false;
    };
    let Some(issued) = payload.strip_prefix(TOKEN_PREFIX) else {
        return false;
    };
    let Ok(issued) = issued.parse::<i64>() else {
        return false;
    };

    let age = chrono::Utc::now().timestamp() - issued;
    if !(0..=TOKEN_MAX_AGE_SECS).contains(&age) {
        debug!(age_secs = age, "session token outside valid age window");
        return false;
    }
    true
}

/// Whether the request carries a valid session cookie.
pub fn is_authenticated(auth: &AuthConfig, jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .map(|cookie| verify_token(auth, cookie.value()))
        .unwrap_or(false)
}

/// Reject the request with a localized 401 unless a valid session is present.
pub fn require_admin(auth: &AuthConfig, jar: &CookieJar) -> Result<(), Response> {
    if is_authenticated(auth, jar) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: messages::AUTH_REQUIRED.to_string(),
            }),
        )
            .into_response())
    }
}

/// Build the session cookie carrying an issued token.
///
/// Attributes: http-only, same-site strict, path root, 24-hour max-age,
/// secure when configured.
pub fn session_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(auth.secure_cookies)
        .max_age(time::Duration::seconds(TOKEN_MAX_AGE_SECS))
        .path("/")
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Request body for POST /api/admin/auth.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Response body for GET /api/admin/auth.
#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
}

/// POST /api/admin/auth
///
/// Validates the password and sets the session cookie on success.
pub async fn post_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Response {
    let password = body.password.unwrap_or_default();
    if password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: messages::MISSING_PASSWORD.to_string(),
            }),
        )
            .into_response();
    }

    if verify_password(&state.auth, &password)
        && let Some(token) = issue_token(&state.auth)
    {
        let jar = jar.add(session_cookie(&state.auth, token));
        return (
            jar,
            Json(crate::handlers::AckResponse {
                success: true,
                message: messages::AUTHENTICATED.to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: messages::INVALID_PASSWORD.to_string(),
        }),
    )
        .into_response()
}

/// GET /api/admin/auth
///
/// Reports whether the request carries a valid session. Never errors.
pub async fn get_session(State(state): State<AppState>, jar: CookieJar) -> Response {
    Json(AuthStatusResponse {
        authenticated: is_authenticated(&state.auth, &jar),
    })
    .into_response()
}

/// DELETE /api/admin/auth
///
/// Clears the session cookie.
pub async fn delete_session(jar: CookieJar) -> Response {
    let jar = jar.remove(removal_cookie());
    (
        jar,
        Json(crate::handlers::AckResponse {
            success: true,
            message: messages::LOGGED_OUT.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            password: Some("jkorea2024!".to_string()),
            secure_cookies: false,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let auth = auth();
        let token = issue_token(&auth).unwrap();
        assert!(verify_token(&auth, &token));
    }

    #[test]
    fn token_with_tampered_signature_fails() {
        let auth = auth();
        let token = issue_token(&auth).unwrap();
        let (payload, _sig) = token.split_once('.').unwrap();
        let forged = format!("{payload}.{}", "0".repeat(64));
        assert!(!verify_token(&auth, &forged));
    }

    #[test]
    fn unsigned_legacy_style_token_fails() {
        // A bare base64("admin:<ts>") token (the reversible-encoding scheme)
        // must not pass verification.
        let auth = auth();
        let legacy = BASE64.encode(format!("admin:{}", chrono::Utc::now().timestamp()));
        assert!(!verify_token(&auth, &legacy));
    }

    #[test]
    fn token_signed_with_other_secret_fails() {
        let auth_a = auth();
        let auth_b = AuthConfig {
            password: Some("other-secret".to_string()),
            secure_cookies: false,
        };
        let token = issue_token(&auth_b).unwrap();
        assert!(!verify_token(&auth_a, &token));
    }

    #[test]
    fn expired_token_fails() {
        let auth = auth();
        let secret = auth.password.clone().unwrap();
        let issued = chrono::Utc::now().timestamp() - TOKEN_MAX_AGE_SECS - 1;
        let payload = format!("{TOKEN_PREFIX}{issued}");
        let token = format!(
            "{}.{}",
            BASE64.encode(payload.as_bytes()),
            sign(secret.as_bytes(), payload.as_bytes())
        );
        assert!(!verify_token(&auth, &token));
    }

    #[test]
    fn wrong_prefix_fails_even_with_valid_signature() {
        let auth = auth();
        let secret = auth.password.clone().unwrap();
        let payload = format!("user:{}", chrono::Utc::now().timestamp());
        let token = format!(
            "{}.{}",
            BASE64.encode(payload.as_bytes()),
            sign(secret.as_bytes(), payload.as_bytes())
        );
        assert!(!verify_token(&auth, &token));
    }

    #[test]
    fn garbage_tokens_are_not_authenticated_and_never_panic() {
        let auth = auth();
        for token in ["", ".", "abc", "abc.def", "%%%.###", "Zm9v.zzzz"] {
            assert!(!verify_token(&auth, token), "token {token:?} must fail");
        }
    }

    #[test]
    fn unconfigured_gate_fails_closed() {
        let auth = AuthConfig {
            password: None,
            secure_cookies: false,
        };
        assert!(!verify_password(&auth, "anything"));
        assert!(issue_token(&auth).is_none());
        assert!(!verify_token(&auth, "whatever.sig"));
    }

    #[test]
    fn password_comparison_rejects_near_misses() {
        let auth = auth();
        assert!(verify_password(&auth, "jkorea2024!"));
        assert!(!verify_password(&auth, "jkorea2024"));
        assert!(!verify_password(&auth, "jkorea2024!!"));
        assert!(!verify_password(&auth, ""));
    }

    #[test]
    fn session_cookie_attributes() {
        let auth = auth();
        let cookie = session_cookie(&auth, "tok".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::seconds(TOKEN_MAX_AGE_SECS))
        );
    }

    #[test]
    fn secure_flag_follows_config() {
        let auth = AuthConfig {
            password: Some("pw".to_string()),
            secure_cookies: true,
        };
        let cookie = session_cookie(&auth, "tok".to_string());
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn debug_redacts_password() {
        let auth = auth();
        let debug_output = format!("{auth:?}");
        assert!(!debug_output.contains("jkorea2024!"));
        assert!(debug_output.contains("[redacted]"));
    }
}
