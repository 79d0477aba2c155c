use serde::{Deserialize, Serialize};

use crate::config::BotConfig;
use crate::error::BotError;

/// Environment variable carrying the bot token. The token never lives in
/// the config file.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Minimal Telegram Bot API client: long-poll for updates, send replies.
pub struct TelegramClient {
    client: reqwest::Client,
    base: String,
    token: String,
}

/// Envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Chat {
    pub id: i64,
}

#[derive(Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

impl TelegramClient {
    /// Build a client from config plus the `TELEGRAM_BOT_TOKEN` environment
    /// variable.
    pub fn from_env(config: &BotConfig) -> Result<Self, BotError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| BotError::MissingToken)?;
        Ok(Self::new(config.api_base.clone(), token))
    }

    pub fn new(base: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base, self.token, method)
    }

    /// Long-poll for updates with ids at or past `offset`. Blocks up to
    /// `timeout_seconds` server-side; an empty vec means the poll expired
    /// quietly.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_seconds: u64,
    ) -> Result<Vec<Update>, BotError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout_seconds,
        };
        let response = self
            .client
            .post(self.method_url("getUpdates"))
            .json(&request)
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<Update>> = response.json().await?;
        if envelope.ok {
            Ok(envelope.result.unwrap_or_default())
        } else {
            Err(BotError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "getUpdates failed".to_string()),
            ))
        }
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let request = SendMessageRequest { chat_id, text };
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(BotError::Api(format!("sendMessage returned {status}: {body}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_update_batch() {
        let raw = r#"{
            "ok": true,
            "result": [
                {
                    "update_id": 857,
                    "message": {
                        "message_id": 12,
                        "chat": {"id": 42, "type": "private"},
                        "date": 1700000000,
                        "text": "1.16439 قاع\n1.16506 قمة"
                    }
                },
                {
                    "update_id": 858,
                    "message": {
                        "message_id": 13,
                        "chat": {"id": 42, "type": "private"},
                        "date": 1700000005
                    }
                }
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<Update>> = serde_json::from_str(raw).unwrap();
        assert!(envelope.ok);
        let updates = envelope.result.unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].update_id, 857);
        assert_eq!(updates[0].message.as_ref().unwrap().chat.id, 42);
        // Non-text messages (photos, stickers) still deserialize.
        assert_eq!(updates[1].message.as_ref().unwrap().text, None);
    }

    #[test]
    fn deserialize_error_envelope() {
        let raw = r#"{"ok": false, "description": "Unauthorized"}"#;
        let envelope: ApiEnvelope<Vec<Update>> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn method_url_embeds_the_token() {
        let client = TelegramClient::new("https://api.telegram.org".to_string(), "123:abc".to_string());
        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }
}
