use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use hilo_engine::format::unreadable_text;
use hilo_engine::EngineError;
use hilo_models::HiloConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hilo",
    about = "Derive entry, take-profit and stop-loss levels from a high/low message"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/hilo.toml")]
    config: String,

    /// Read the message from a file instead of stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Leave the formula block out of the reply
    #[arg(long)]
    no_formulas: bool,
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("Failed to read config: {}", cli.config))?;
    let mut config: HiloConfig =
        toml::from_str(&config_str).with_context(|| "Failed to parse config")?;
    if cli.no_formulas {
        config.engine.show_formulas = false;
    }

    let text = if let Some(input_path) = &cli.input {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input: {input_path}"))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    };

    let parser = hilo::build_parser(&config).context("Failed to build parser")?;

    match hilo::analyze(&parser, &text, &config.engine) {
        Ok(analysis) => {
            tracing::debug!(direction = ?analysis.direction, "Message analyzed");
            println!("{}", hilo::render_reply(&analysis, &config.engine));
            Ok(())
        }
        Err(EngineError::Unreadable) => {
            println!("{}", unreadable_text());
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::anyhow!("Analysis failed: {e}")),
    }
}
