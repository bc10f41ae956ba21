// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discord-compatible webhook client.
//!
//! Builds the new-inquiry embed (title, three fields, footer with a KST
//! display time) and posts it with a bounded timeout. No retry, no queue.

use std::time::Duration;

use chrono::{FixedOffset, Utc};
use munui_config::model::NotifyConfig;
use munui_core::MunuiError;
use tracing::{debug, error, warn};

/// Embed accent color (amber).
const EMBED_COLOR: u32 = 0x00f5_9e0b;

/// Webhook notifier for new inquiries.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
    footer_text: String,
}

impl WebhookNotifier {
    /// Build a notifier from configuration.
    ///
    /// The request timeout bounds how long a hung webhook endpoint can hold
    /// a spawned notification task; it never blocks the intake response.
    pub fn new(config: &NotifyConfig) -> Result<Self, MunuiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MunuiError::Notify {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
            footer_text: config.footer_text.clone(),
        })
    }

    /// Whether a webhook URL is configured.
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Fire-and-forget dispatch: spawns the send and returns immediately.
    ///
    /// The intake response path never awaits this; there is no result
    /// channel back to the caller.
    pub fn dispatch(&self, name: String, phone: String, message: String) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.notify(&name, &phone, &message).await;
        });
    }

    /// Send the notification, logging any failure. Never returns an error.
    pub async fn notify(&self, name: &str, phone: &str, message: &str) {
        match self.send(name, phone, message).await {
            Ok(()) => debug!("inquiry notification delivered"),
            Err(e) => error!(error = %e, "inquiry notification failed"),
        }
    }

    /// Send the notification, surfacing failures to the caller.
    ///
    /// An unconfigured webhook URL logs a warning and succeeds.
    pub async fn send(
        &self,
        name: &str,
        phone: &str,
        message: &str,
    ) -> Result<(), MunuiError> {
        let Some(url) = &self.webhook_url else {
            warn!("webhook URL is not configured -- skipping notification");
            return Ok(());
        };

        let body = build_embed(name, phone, message, &self.footer_text);

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MunuiError::Notify {
                message: format!("webhook request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MunuiError::Notify {
                message: format!("webhook returned {status}: {body}"),
                source: None,
            });
        }

        Ok(())
    }
}

/// Build the Discord embed payload for a new inquiry.
///
/// The footer carries a human-readable timestamp shifted to UTC+9 (KST);
/// the machine-readable `timestamp` field stays RFC 3339 UTC.
fn build_embed(
    name: &str,
    phone: &str,
    message: &str,
    footer_text: &str,
) -> serde_json::Value {
    let now = Utc::now();
    let kst = FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset");
    let display_time = now.with_timezone(&kst).format("%Y-%m-%d %H:%M:%S");

    serde_json::json!({
        "embeds": [
            {
                "title": "🔔 새로운 상담 문의가 접수되었습니다",
                "color": EMBED_COLOR,
                "fields": [
                    { "name": "👤 이름", "value": name, "inline": true },
                    { "name": "📞 연락처", "value": phone, "inline": true },
                    { "name": "💬 문의 내용", "value": message, "inline": false },
                ],
                "footer": { "text": format!("{footer_text} | {display_time}") },
                "timestamp": now.to_rfc3339(),
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_with_url(url: Option<String>) -> NotifyConfig {
        NotifyConfig {
            webhook_url: url,
            footer_text: "조력자들 | 상담 문의".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn embed_contains_all_fields_and_footer() {
        let embed = build_embed("홍길동", "010-1234-5678", "문의", "조력자들 | 상담 문의");
        let rendered = embed.to_string();
        assert!(rendered.contains("새로운 상담 문의가 접수되었습니다"));
        assert!(rendered.contains("홍길동"));
        assert!(rendered.contains("010-1234-5678"));
        assert!(rendered.contains("문의"));
        assert!(rendered.contains("조력자들 | 상담 문의"));

        let fields = &embed["embeds"][0]["fields"];
        assert_eq!(fields.as_array().unwrap().len(), 3);
        assert_eq!(embed["embeds"][0]["color"], 0x00f5_9e0b);
    }

    #[tokio::test]
    async fn send_posts_embed_to_webhook() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(serde_json::json!({
                "embeds": [{ "title": "🔔 새로운 상담 문의가 접수되었습니다" }]
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let notifier =
            WebhookNotifier::new(&config_with_url(Some(format!("{}/hook", server.uri()))))
                .unwrap();
        notifier.send("홍길동", "010-1234-5678", "문의").await.unwrap();
    }

    #[tokio::test]
    async fn send_surfaces_non_2xx_as_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier =
            WebhookNotifier::new(&config_with_url(Some(format!("{}/hook", server.uri()))))
                .unwrap();
        let err = notifier
            .send("홍길동", "010-1234-5678", "문의")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }

    #[tokio::test]
    async fn notify_swallows_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier =
            WebhookNotifier::new(&config_with_url(Some(server.uri()))).unwrap();
        // Must not panic or propagate.
        notifier.notify("홍길동", "010-1234-5678", "문의").await;
    }

    #[tokio::test]
    async fn unconfigured_webhook_is_a_silent_noop() {
        let notifier = WebhookNotifier::new(&config_with_url(None)).unwrap();
        assert!(!notifier.is_configured());
        notifier.send("홍길동", "010-1234-5678", "문의").await.unwrap();
    }
}
