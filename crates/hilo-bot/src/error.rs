use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,

    #[error("Engine error: {0}")]
    Engine(#[from] hilo_engine::EngineError),
}
