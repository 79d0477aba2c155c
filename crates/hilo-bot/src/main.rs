use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hilo_bot::api::TelegramClient;
use hilo_bot::config::BotFileConfig;
use hilo_bot::daemon::BotDaemon;

#[derive(Parser, Debug)]
#[command(
    name = "hilo-bot",
    about = "hilo Telegram bot - answers high/low messages with entry, take-profit and stop-loss levels"
)]
struct Cli {
    /// Path to bot configuration file
    #[arg(short, long, default_value = "config/hilo-bot.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("Failed to read config: {}", cli.config))?;
    let config: BotFileConfig =
        toml::from_str(&config_str).with_context(|| "Failed to parse bot config")?;

    let client =
        TelegramClient::from_env(&config.bot).context("TELEGRAM_BOT_TOKEN must be set")?;

    let daemon = BotDaemon::new(config, client).context("Failed to build daemon")?;
    let cancel = daemon.cancel_token();

    // Handle shutdown signals
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Received shutdown signal");
        cancel.cancel();
    });

    daemon
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Daemon error: {e}"))?;

    Ok(())
}
