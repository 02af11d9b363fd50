//! Telegram notification sink.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    config::TelegramConfig,
    error::{NotifyError, truncate_body},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts a preformatted text message to a Telegram chat via the Bot API.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { bot_token: config.bot_token, chat_id: config.chat_id, http }
    }

    /// Post `text` to the configured chat. Success is HTTP 200; anything else
    /// is a `NotifyError`, which callers treat as non-fatal.
    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = SendMessage { chat_id: &self.chat_id, text };

        let res = self.http.post(&url).json(&payload).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await?;
            return Err(NotifyError::Status {
                status,
                description: extract_description(&body),
            });
        }

        Ok(())
    }
}

/// Pull `description` out of a Telegram error response, falling back to the
/// truncated raw body when it isn't JSON.
fn extract_description(body: &str) -> String {
    #[derive(Deserialize)]
    struct TgError {
        description: Option<String>,
    }

    match serde_json::from_str::<TgError>(body) {
        Ok(err) => err.description.unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) => truncate_body(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_description_from_error_response() {
        let body = r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#;
        assert_eq!(extract_description(body), "Bad Request: chat not found");
    }

    #[test]
    fn json_without_description_reports_unknown_error() {
        let body = r#"{"ok": false, "error_code": 400}"#;
        assert_eq!(extract_description(body), "Unknown error");
    }

    #[test]
    fn non_json_body_is_passed_through_truncated() {
        assert_eq!(extract_description("bad gateway"), "bad gateway");

        let long = "y".repeat(400);
        assert!(extract_description(&long).ends_with("..."));
    }

    #[test]
    fn multibyte_html_error_page_does_not_panic() {
        // Byte 200 falls inside a typographic quote; the failure must stay
        // reportable, never abort the run.
        let body = format!("<html>{}“502 Bad Gateway”</html>", "x".repeat(193));
        let description = extract_description(&body);

        assert!(description.ends_with("..."));
    }

    #[test]
    fn constructing_the_notifier_does_not_panic() {
        let notifier = TelegramNotifier::new(TelegramConfig {
            bot_token: "TOKEN".to_string(),
            chat_id: "42".to_string(),
        });
        assert_eq!(notifier.chat_id, "42");
    }

    #[test]
    fn send_message_payload_shape() {
        let payload = SendMessage { chat_id: "42", text: "hello" };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["chat_id"], "42");
        assert_eq!(json["text"], "hello");
    }
}
