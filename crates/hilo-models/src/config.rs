use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level configuration for hilo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HiloConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
}

/// How the stop-loss is derived when the message does not quote one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopLossMode {
    /// Past the extreme by a fraction of the high-low range.
    #[default]
    PercentOfRange,
    /// Exactly at the quoted extreme (high for sell, low for buy).
    AtExtreme,
    /// Past the extreme by a fixed price offset.
    Fixed,
}

/// Level-calculation parameters. Immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Fraction of the high-low range between the extreme and the entry.
    #[serde(default = "default_entry_multiplier")]
    pub entry_multiplier: Decimal,
    /// Fraction of the extreme-to-entry distance projected past the other
    /// extreme for the take-profit.
    #[serde(default = "default_target_multiplier")]
    pub target_multiplier: Decimal,
    #[serde(default)]
    pub stop_loss_mode: StopLossMode,
    /// Used by `percent_of_range`.
    #[serde(default = "default_stop_loss_percent")]
    pub stop_loss_percent: Decimal,
    /// Used by `fixed`.
    #[serde(default = "default_stop_loss_offset")]
    pub stop_loss_offset: Decimal,
    /// Floor applied to the display precision derived from the message.
    /// 0 means output precision always mirrors the input exactly.
    #[serde(default)]
    pub min_fraction_digits: u32,
    /// Append the spreadsheet-style formula block to replies.
    #[serde(default = "default_true")]
    pub show_formulas: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            entry_multiplier: default_entry_multiplier(),
            target_multiplier: default_target_multiplier(),
            stop_loss_mode: StopLossMode::default(),
            stop_loss_percent: default_stop_loss_percent(),
            stop_loss_offset: default_stop_loss_offset(),
            min_fraction_digits: 0,
            show_formulas: true,
        }
    }
}

/// Keyword tables the parser is built from.
///
/// Ordered lists of plain words (matched case-insensitively, both Arabic
/// spellings of the high keyword included). Extending a list in
/// configuration is enough to teach the parser a new spelling; the parsing
/// logic never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    #[serde(default = "default_high_keywords")]
    pub high: Vec<String>,
    #[serde(default = "default_low_keywords")]
    pub low: Vec<String>,
    #[serde(default = "default_stop_keywords")]
    pub stop: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            high: default_high_keywords(),
            low: default_low_keywords(),
            stop: default_stop_keywords(),
        }
    }
}

fn default_entry_multiplier() -> Decimal {
    Decimal::new(323, 3)
}
fn default_target_multiplier() -> Decimal {
    Decimal::new(786, 3)
}
fn default_stop_loss_percent() -> Decimal {
    Decimal::new(1, 1)
}
fn default_stop_loss_offset() -> Decimal {
    Decimal::ZERO
}
fn default_true() -> bool {
    true
}
fn default_high_keywords() -> Vec<String> {
    vec![
        "قمة".to_string(),
        "قمه".to_string(),
        "high".to_string(),
        "هاي".to_string(),
        "top".to_string(),
        "peak".to_string(),
        "h".to_string(),
    ]
}
fn default_low_keywords() -> Vec<String> {
    vec!["قاع".to_string(), "low".to_string()]
}
fn default_stop_keywords() -> Vec<String> {
    vec!["وقف".to_string(), "ستوب".to_string(), "sl".to_string()]
}
