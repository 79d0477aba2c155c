use hilo_models::{KeywordConfig, OrderHint, ParsedLevels, PriceToken, StopLoss};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::precision::fraction_digits;

/// A numeric literal: optional sign, digits, optionally one `.` or `,`
/// followed by more digits. A trailing separator with no digits after it is
/// not part of the number.
const NUMBER: &str = r"[-+]?\d+(?:[.,]\d+)?";

/// Regex-backed message parser built from a keyword table.
///
/// All patterns are compiled once at construction. Matching runs against
/// the raw text: literals are captured untouched so their precision can be
/// measured before any separator normalization, and case and the alternate
/// Arabic spelling are handled inside the patterns themselves.
pub struct SignalParser {
    high_keyword: Regex,
    low_keyword: Regex,
    high_anchored: Regex,
    low_anchored: Regex,
    stop: Regex,
    number: Regex,
}

impl SignalParser {
    pub fn new(keywords: &KeywordConfig) -> Result<Self, EngineError> {
        let high = alternation(&keywords.high);
        let low = alternation(&keywords.low);
        let stop = alternation(&keywords.stop);

        Ok(Self {
            high_keyword: Regex::new(&format!(r"(?i)(?:{high})\b"))?,
            low_keyword: Regex::new(&format!(r"(?i)(?:{low})\b"))?,
            // A number somewhere before the keyword, same line.
            high_anchored: Regex::new(&format!(r"(?i)({NUMBER})[^\n\r]*?(?:{high})\b"))?,
            low_anchored: Regex::new(&format!(r"(?i)({NUMBER})[^\n\r]*?(?:{low})\b"))?,
            stop: Regex::new(&format!(r"(?i)\b(?:{stop})\b\s*[:=]?\s*({NUMBER})"))?,
            number: Regex::new(NUMBER)?,
        })
    }

    /// Recover the high/low pair from free-form text.
    ///
    /// Keyword-anchored extraction wins: a number on the same line before a
    /// level keyword names that level explicitly, whatever the numeric
    /// order. When either anchor is missing the first two numbers in the
    /// message are used instead, assigned by keyword order if both keywords
    /// appeared, by numeric order otherwise.
    pub fn parse(&self, text: &str) -> Result<ParsedLevels, EngineError> {
        let order_hint = self.order_hint(text);

        let high = self.anchored(&self.high_anchored, text);
        let low = self.anchored(&self.low_anchored, text);
        if let (Some(high), Some(low)) = (high, low) {
            return Ok(ParsedLevels {
                high,
                low,
                order_hint,
            });
        }

        let mut numbers = self.number.find_iter(text).filter_map(|m| token(m.as_str()));
        let (Some(first), Some(second)) = (numbers.next(), numbers.next()) else {
            return Err(EngineError::Unreadable);
        };

        // Equal values leave the hint at high-first; the direction
        // tie-break downstream resolves the same way.
        let order_hint = match order_hint {
            OrderHint::Unknown if first.value < second.value => OrderHint::LowFirst,
            OrderHint::Unknown => OrderHint::HighFirst,
            hint => hint,
        };
        let (high, low) = if order_hint == OrderHint::LowFirst {
            (second, first)
        } else {
            (first, second)
        };
        Ok(ParsedLevels {
            high,
            low,
            order_hint,
        })
    }

    /// Find an explicit stop-loss quote: a stop keyword, an optional
    /// `:`/`=`, then a number. Independent of the high/low extraction; it
    /// does not consume anything.
    pub fn extract_stop_loss(&self, text: &str) -> Option<StopLoss> {
        let captures = self.stop.captures(text)?;
        let literal = captures.get(1)?.as_str();
        let value = literal.replace(',', ".").parse().ok()?;
        Some(StopLoss {
            value,
            fraction_digits: fraction_digits(literal),
        })
    }

    fn order_hint(&self, text: &str) -> OrderHint {
        match (self.low_keyword.find(text), self.high_keyword.find(text)) {
            (Some(low), Some(high)) if low.start() < high.start() => OrderHint::LowFirst,
            (Some(_), Some(_)) => OrderHint::HighFirst,
            _ => OrderHint::Unknown,
        }
    }

    fn anchored(&self, pattern: &Regex, text: &str) -> Option<PriceToken> {
        pattern
            .captures(text)
            .and_then(|captures| token(captures.get(1)?.as_str()))
    }
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

fn token(literal: &str) -> Option<PriceToken> {
    let value: Decimal = literal.replace(',', ".").parse().ok()?;
    Some(PriceToken {
        value,
        literal: literal.to_string(),
        fraction_digits: fraction_digits(literal),
    })
}
