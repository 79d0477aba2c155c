use hilo_models::{
    ComputedLevels, EngineConfig, OrderHint, ParsedLevels, StopLoss, StopLossMode, TradeDirection,
};
use rust_decimal::Decimal;

/// Infer the trade direction from which level the user led with.
///
/// Keyword order wins over numeric order: leading with the low means buy
/// even when the "low" value is the larger one. Without a usable hint the
/// numeric order decides, and the equal-values tie goes to sell.
pub fn infer_direction(levels: &ParsedLevels) -> TradeDirection {
    match levels.order_hint {
        OrderHint::LowFirst => TradeDirection::Buy,
        OrderHint::HighFirst => TradeDirection::Sell,
        OrderHint::Unknown if levels.low.value < levels.high.value => TradeDirection::Buy,
        OrderHint::Unknown => TradeDirection::Sell,
    }
}

/// Compute entry, take-profit and stop-loss from the quoted extremes.
///
/// `range` is signed and the parse is trusted: keyword anchoring may place
/// the quoted low above the quoted high and the formulas stay well-defined.
/// All arithmetic is exact decimal.
pub fn compute_levels(
    direction: TradeDirection,
    high: Decimal,
    low: Decimal,
    explicit_stop: Option<&StopLoss>,
    config: &EngineConfig,
) -> ComputedLevels {
    let range = high - low;

    let (entry, target) = match direction {
        TradeDirection::Sell => {
            let entry = high - range * config.entry_multiplier;
            (entry, low - (high - entry) * config.target_multiplier)
        }
        TradeDirection::Buy => {
            let entry = low + range * config.entry_multiplier;
            (entry, high + (entry - low) * config.target_multiplier)
        }
    };

    let (stop_loss, stop_loss_fraction_digits) = match explicit_stop {
        Some(stop) => (stop.value, Some(stop.fraction_digits)),
        None => (derived_stop(direction, high, low, range, config), None),
    };

    ComputedLevels {
        entry,
        target,
        stop_loss,
        stop_loss_fraction_digits,
    }
}

fn derived_stop(
    direction: TradeDirection,
    high: Decimal,
    low: Decimal,
    range: Decimal,
    config: &EngineConfig,
) -> Decimal {
    match (config.stop_loss_mode, direction) {
        (StopLossMode::AtExtreme, TradeDirection::Sell) => high,
        (StopLossMode::AtExtreme, TradeDirection::Buy) => low,
        (StopLossMode::Fixed, TradeDirection::Sell) => high + config.stop_loss_offset,
        (StopLossMode::Fixed, TradeDirection::Buy) => low - config.stop_loss_offset,
        (StopLossMode::PercentOfRange, TradeDirection::Sell) => {
            high + range * config.stop_loss_percent
        }
        (StopLossMode::PercentOfRange, TradeDirection::Buy) => {
            low - range * config.stop_loss_percent
        }
    }
}
