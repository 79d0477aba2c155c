pub mod error;
pub mod format;
pub mod levels;
pub mod parser;
pub mod precision;

pub use error::EngineError;
pub use format::{display_digits, format_price, render_reply, FormulaBlock};
pub use levels::{compute_levels, infer_direction};
pub use parser::SignalParser;
pub use precision::fraction_digits;
