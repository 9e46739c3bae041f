//! Telegram relay of resolved quotes.
//!
//! Sending never fails from the caller's point of view: every problem is
//! folded into a [`NotificationOutcome`].

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::format::format_message;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{IndexQuote, Settings, TelegramCredentials};

/// Why a notification was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingBotToken,
    MissingChatId,
    PlaceholderCredentials,
}

impl SkipReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingBotToken => "TELEGRAM_BOT_TOKEN is not set",
            Self::MissingChatId => "TELEGRAM_CHAT_ID is not set",
            Self::PlaceholderCredentials => "Telegram credentials still hold placeholder values",
        }
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one notification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum NotificationOutcome {
    Sent,
    Skipped(SkipReason),
    Failed(String),
}

impl NotificationOutcome {
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

impl Display for NotificationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => f.write_str("sent"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Error payload returned by the Bot API.
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_code: Option<u16>,
    #[serde(default)]
    description: Option<String>,
}

/// Posts formatted quotes to a Telegram chat.
#[derive(Clone)]
pub struct NotificationDispatcher {
    http_client: Arc<dyn HttpClient>,
    api_base_url: String,
    credentials: TelegramCredentials,
    timeout_ms: u64,
}

impl NotificationDispatcher {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        api_base_url: impl Into<String>,
        credentials: TelegramCredentials,
    ) -> Self {
        Self {
            http_client,
            api_base_url: api_base_url.into(),
            credentials,
            timeout_ms: 5_000,
        }
    }

    pub fn from_settings(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self::new(
            http_client,
            settings.telegram_api_base_url.clone(),
            settings.telegram.clone(),
        )
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the credentials to use, or why sending must be skipped.
    fn usable_credentials(&self) -> Result<(&str, &str), SkipReason> {
        let token = self
            .credentials
            .bot_token
            .as_deref()
            .ok_or(SkipReason::MissingBotToken)?;
        let chat_id = self
            .credentials
            .chat_id
            .as_deref()
            .ok_or(SkipReason::MissingChatId)?;
        if self.credentials.is_placeholder() {
            return Err(SkipReason::PlaceholderCredentials);
        }
        Ok((token, chat_id))
    }

    /// Formats `quote` and posts it to the configured chat.
    pub async fn send(&self, quote: &IndexQuote) -> NotificationOutcome {
        self.send_text(&format_message(quote)).await
    }

    /// Posts an already formatted HTML message.
    pub async fn send_text(&self, text: &str) -> NotificationOutcome {
        let (token, chat_id) = match self.usable_credentials() {
            Ok(credentials) => credentials,
            Err(reason) => {
                tracing::warn!(%reason, "telegram not configured, skipping notification");
                return NotificationOutcome::Skipped(reason);
            }
        };

        let url = format!(
            "{}/bot{token}/sendMessage",
            self.api_base_url.trim_end_matches('/')
        );
        let body = SendMessageBody {
            chat_id,
            text,
            parse_mode: "HTML",
        };
        let request = match HttpRequest::post(url).with_json(&body) {
            Ok(request) => request.with_timeout_ms(self.timeout_ms),
            Err(error) => {
                return NotificationOutcome::Failed(format!("could not encode message: {error}"));
            }
        };

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, "telegram request failed");
                return NotificationOutcome::Failed(error.message().to_owned());
            }
        };

        if response.is_success() {
            tracing::info!(chat_id, "telegram notification sent");
            return NotificationOutcome::Sent;
        }

        let reason = match serde_json::from_str::<ProviderError>(&response.body) {
            Ok(ProviderError {
                description: Some(description),
                error_code,
            }) => format!(
                "{} {description}",
                error_code.unwrap_or(response.status)
            ),
            _ => format!("telegram returned status {}", response.status),
        };
        tracing::error!(status = response.status, %reason, "telegram rejected notification");
        NotificationOutcome::Failed(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpResponse, StubHttpClient};

    fn dispatcher(
        client: Arc<StubHttpClient>,
        token: Option<&str>,
        chat: Option<&str>,
    ) -> NotificationDispatcher {
        NotificationDispatcher::new(
            client,
            "https://telegram.test",
            TelegramCredentials::new(token.map(str::to_owned), chat.map(str::to_owned)),
        )
    }

    #[tokio::test]
    async fn missing_chat_id_is_reported() {
        let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json("{}")));
        let outcome = dispatcher(client.clone(), Some("123:abc"), None)
            .send_text("hola")
            .await;

        assert_eq!(outcome, NotificationOutcome::Skipped(SkipReason::MissingChatId));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn posts_to_bot_endpoint_with_html_mode() {
        let client = Arc::new(StubHttpClient::respond(HttpResponse::ok_json(r#"{"ok":true}"#)));
        let outcome = dispatcher(client.clone(), Some("123:abc"), Some("-100"))
            .send_text("<b>hola</b>")
            .await;

        assert_eq!(outcome, NotificationOutcome::Sent);
        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://telegram.test/bot123:abc/sendMessage");

        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap_or_default()).expect("json");
        assert_eq!(body["chat_id"], "-100");
        assert_eq!(body["text"], "<b>hola</b>");
        assert_eq!(body["parse_mode"], "HTML");
    }

    #[tokio::test]
    async fn provider_description_is_surfaced() {
        let client = Arc::new(StubHttpClient::respond(HttpResponse::new(
            400,
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )));
        let outcome = dispatcher(client, Some("123:abc"), Some("-100"))
            .send_text("hola")
            .await;

        assert_eq!(
            outcome,
            NotificationOutcome::Failed(String::from("400 Bad Request: chat not found"))
        );
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let value = serde_json::to_value(NotificationOutcome::Skipped(SkipReason::MissingBotToken))
            .expect("serializable");
        assert_eq!(value["status"], "skipped");
        assert_eq!(value["reason"], "missing_bot_token");
    }
}
