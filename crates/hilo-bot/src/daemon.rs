use std::time::Duration;

use hilo_engine::format::{unreadable_text, usage_text};
use hilo_engine::{EngineError, SignalParser};
use tokio_util::sync::CancellationToken;
use tracing;

use crate::api::{TelegramClient, Update};
use crate::config::BotFileConfig;
use crate::error::BotError;

/// The bot daemon. Long-polls Telegram and answers each text message with
/// the computed levels.
pub struct BotDaemon {
    config: BotFileConfig,
    client: TelegramClient,
    parser: SignalParser,
    cancel: CancellationToken,
}

impl BotDaemon {
    pub fn new(config: BotFileConfig, client: TelegramClient) -> Result<Self, BotError> {
        let parser = SignalParser::new(&config.keywords)?;
        Ok(Self {
            config,
            client,
            parser,
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a CancellationToken that can be used to trigger shutdown.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the daemon until cancelled.
    pub async fn run(&self) -> Result<(), BotError> {
        tracing::info!("hilo bot daemon starting");

        let mut offset = 0i64;
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::info!("Poll loop shutting down");
                    break;
                }
                polled = self.client.get_updates(offset, self.config.bot.poll_timeout_seconds) => {
                    match polled {
                        Ok(updates) => {
                            for update in updates {
                                offset = offset.max(update.update_id + 1);
                                self.handle_update(update).await;
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "getUpdates failed");
                            tokio::time::sleep(Duration::from_secs(
                                self.config.bot.retry_backoff_seconds,
                            ))
                            .await;
                        }
                    }
                }
            }
        }

        tracing::info!("hilo bot daemon stopped");
        Ok(())
    }

    async fn handle_update(&self, update: Update) {
        let Some(message) = update.message else { return };
        let Some(text) = message.text.as_deref() else {
            return;
        };
        let chat_id = message.chat.id;

        let reply = self.reply_for(text);
        if let Err(e) = self.client.send_message(chat_id, &reply).await {
            tracing::error!(chat_id, error = %e, "Failed to send reply");
        }
    }

    fn reply_for(&self, text: &str) -> String {
        match route(text) {
            Route::Usage => usage_text().to_string(),
            Route::Analyze => match hilo::analyze(&self.parser, text, &self.config.engine) {
                Ok(analysis) => {
                    tracing::info!(direction = ?analysis.direction, "Message analyzed");
                    hilo::render_reply(&analysis, &self.config.engine)
                }
                Err(EngineError::Unreadable) => unreadable_text().to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, "Analysis failed");
                    unreadable_text().to_string()
                }
            },
        }
    }
}

/// Where an incoming message should go. Kept free of I/O so routing is
/// directly testable.
#[derive(Debug, PartialEq, Eq)]
enum Route {
    Usage,
    Analyze,
}

fn route(text: &str) -> Route {
    // Commands may arrive as "/start@some_bot" in group chats, or with a
    // payload after the command word.
    let first_word = text.split_whitespace().next().unwrap_or_default();
    match first_word.split('@').next().unwrap_or_default() {
        "/start" | "/help" => Route::Usage,
        _ => Route::Analyze,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_route_to_usage() {
        assert_eq!(route("/start"), Route::Usage);
        assert_eq!(route("/help"), Route::Usage);
        assert_eq!(route("  /start  "), Route::Usage);
        assert_eq!(route("/start@hilo_levels_bot"), Route::Usage);
    }

    #[test]
    fn everything_else_routes_to_analysis() {
        assert_eq!(route("1.16439 قاع\n1.16506 قمة"), Route::Analyze);
        assert_eq!(route("/unknown"), Route::Analyze);
        assert_eq!(route(""), Route::Analyze);
    }
}
