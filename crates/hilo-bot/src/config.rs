use hilo_models::{EngineConfig, KeywordConfig};
use serde::{Deserialize, Serialize};

/// Telegram transport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotConfig {
    /// Long-poll timeout handed to getUpdates, in seconds.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_seconds: u64,
    /// Base URL of the Bot API. Overridable for tests.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Seconds to wait before polling again after a failed request.
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_seconds: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            poll_timeout_seconds: default_poll_timeout(),
            api_base: default_api_base(),
            retry_backoff_seconds: default_retry_backoff(),
        }
    }
}

/// The full configuration file for the bot daemon: transport settings plus
/// the engine and keyword sections shared with the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BotFileConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
}

fn default_poll_timeout() -> u64 {
    30
}
fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}
fn default_retry_backoff() -> u64 {
    5
}
