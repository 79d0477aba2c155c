pub mod config;
pub mod signal;

pub use config::{EngineConfig, HiloConfig, KeywordConfig, StopLossMode};
pub use signal::{
    ComputedLevels, OrderHint, ParsedLevels, PriceToken, StopLoss, TradeDirection,
};
