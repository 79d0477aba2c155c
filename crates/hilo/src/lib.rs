//! hilo - high/low message analyzer
//!
//! Reads free-form, mixed Arabic/English messages that quote a market high
//! and low, infers the trade direction from keyword or numeric order, and
//! derives entry / take-profit / stop-loss levels rendered at the decimal
//! precision the user typed.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use hilo::models::{HiloConfig, TradeDirection};
//!
//! let config = HiloConfig::default();
//! let parser = hilo::build_parser(&config).unwrap();
//! let analysis = hilo::analyze(&parser, "1.16439 قاع\n1.16506 قمة", &config.engine).unwrap();
//! assert_eq!(analysis.direction, TradeDirection::Buy);
//! ```

pub use hilo_engine as engine;
pub use hilo_models as models;

use hilo_engine::{EngineError, SignalParser};
use hilo_models::{ComputedLevels, EngineConfig, HiloConfig, ParsedLevels, StopLoss, TradeDirection};

/// Everything derived from one message.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub levels: ParsedLevels,
    pub direction: TradeDirection,
    pub stop_loss: Option<StopLoss>,
    pub computed: ComputedLevels,
}

/// Build a SignalParser from configuration.
pub fn build_parser(config: &HiloConfig) -> Result<SignalParser, EngineError> {
    SignalParser::new(&config.keywords)
}

/// Run the full pipeline on one message: parse the levels, infer the
/// direction, pick up an explicit stop-loss, compute the rest.
pub fn analyze(
    parser: &SignalParser,
    text: &str,
    config: &EngineConfig,
) -> Result<Analysis, EngineError> {
    let levels = parser.parse(text)?;
    let direction = hilo_engine::infer_direction(&levels);
    let stop_loss = parser.extract_stop_loss(text);
    let computed = hilo_engine::compute_levels(
        direction,
        levels.high.value,
        levels.low.value,
        stop_loss.as_ref(),
        config,
    );
    Ok(Analysis {
        levels,
        direction,
        stop_loss,
        computed,
    })
}

/// Render the chat reply for an analysis.
pub fn render_reply(analysis: &Analysis, config: &EngineConfig) -> String {
    hilo_engine::render_reply(
        analysis.direction,
        &analysis.levels,
        &analysis.computed,
        config,
    )
}
