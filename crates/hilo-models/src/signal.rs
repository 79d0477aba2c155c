use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numeric literal captured from the message text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceToken {
    pub value: Decimal,
    /// The exact substring the number was matched from.
    pub literal: String,
    /// Fractional digits the user typed, measured from `literal` at capture
    /// time. Never recomputed from `value`: trailing zeros and the user's
    /// separator must survive.
    pub fraction_digits: u32,
}

/// Which of the two level keywords appeared first in the message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderHint {
    LowFirst,
    HighFirst,
    /// Fewer than both keyword kinds were found.
    Unknown,
}

/// The high/low pair recovered from one message.
///
/// The two tokens may arrive in either numeric order; nothing guarantees
/// `high.value > low.value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedLevels {
    pub high: PriceToken,
    pub low: PriceToken,
    pub order_hint: OrderHint,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// A stop-loss the user quoted explicitly, with its own tracked precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopLoss {
    pub value: Decimal,
    pub fraction_digits: u32,
}

/// Entry, take-profit and stop-loss for one request. Built fresh per
/// message; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComputedLevels {
    pub entry: Decimal,
    pub target: Decimal,
    pub stop_loss: Decimal,
    /// Set when the stop-loss was quoted by the user and carries its own
    /// display precision; a derived stop renders at the entry/target
    /// precision instead.
    pub stop_loss_fraction_digits: Option<u32>,
}
