use hilo_models::{ComputedLevels, EngineConfig, ParsedLevels, TradeDirection};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round half-up to `digits` fractional places and render with exactly that
/// many digits, trailing zeros included. Reformatting an already-formatted
/// value at the same precision is a no-op.
pub fn format_price(value: Decimal, digits: u32) -> String {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = digits as usize)
}

/// Display precision for entry and target: the wider of the two quoted
/// precisions, raised to the configured floor.
pub fn display_digits(levels: &ParsedLevels, config: &EngineConfig) -> u32 {
    levels
        .high
        .fraction_digits
        .max(levels.low.fraction_digits)
        .max(config.min_fraction_digits)
}

/// Spreadsheet-style formula lines echoed under the computed levels.
///
/// `I` is the high cell, `J` the low cell, `K` the entry. The with-values
/// lines substitute the actual decimals so the math can be replayed in a
/// sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaBlock {
    pub entry_symbolic: String,
    pub target_symbolic: String,
    pub entry_with_values: String,
    pub target_with_values: String,
}

pub fn formula_block(
    direction: TradeDirection,
    levels: &ParsedLevels,
    computed: &ComputedLevels,
    config: &EngineConfig,
) -> FormulaBlock {
    let a = config.entry_multiplier;
    let b = config.target_multiplier;
    let high = levels.high.value;
    let low = levels.low.value;
    let entry = computed.entry;

    match direction {
        TradeDirection::Sell => FormulaBlock {
            entry_symbolic: format!("=I-((I-J)*{a})"),
            target_symbolic: format!("=J-((I-K)*{b})"),
            entry_with_values: format!("={high}-(({high}-{low})*{a})"),
            target_with_values: format!("={low}-(({high}-{entry})*{b})"),
        },
        TradeDirection::Buy => FormulaBlock {
            entry_symbolic: format!("=J+((I-J)*{a})"),
            target_symbolic: format!("=I+((K-J)*{b})"),
            entry_with_values: format!("={low}+(({high}-{low})*{a})"),
            target_with_values: format!("={high}+(({entry}-{low})*{b})"),
        },
    }
}

/// Assemble the chat reply for an analyzed message. Levels render at the
/// precision the user typed; an explicit stop keeps its own precision.
pub fn render_reply(
    direction: TradeDirection,
    levels: &ParsedLevels,
    computed: &ComputedLevels,
    config: &EngineConfig,
) -> String {
    let digits = display_digits(levels, config);
    let stop_digits = computed.stop_loss_fraction_digits.unwrap_or(digits);

    let (mode, title) = match direction {
        TradeDirection::Buy => ("BUY", "Buy Limit (K)"),
        TradeDirection::Sell => ("SELL", "Sell Limit (K)"),
    };

    let mut reply = format!(
        "📊 High(I)={high} | Low(J)={low}\n✅ {mode} → {title}={entry} | TP={target}\n🛑 SL={stop}\n",
        high = format_price(levels.high.value, digits),
        low = format_price(levels.low.value, digits),
        entry = format_price(computed.entry, digits),
        target = format_price(computed.target, digits),
        stop = format_price(computed.stop_loss, stop_digits),
    );

    if config.show_formulas {
        let formulas = formula_block(direction, levels, computed, config);
        reply.push_str(&format!(
            "\n🧮 Excel:\n{}\n{}\n\n🧮 With values:\n{}\n{}\n",
            formulas.entry_symbolic,
            formulas.target_symbolic,
            formulas.entry_with_values,
            formulas.target_with_values,
        ));
    }

    reply
}

/// Help text for /start and /help.
pub fn usage_text() -> &'static str {
    "أرسل قمة/قاع بأي ترتيب:\n\
     - قمة ثم قاع ⇒ Sell Limit + TP\n\
     - قاع ثم قمة ⇒ Buy Limit + TP\n\
     أو رقمين فقط: الأصغر أولًا ⇒ Buy، الأكبر أولًا ⇒ Sell.\n\
     يمكن إضافة وقف: \"وقف 1.1650\".\n\
     تُضبط المعاملات من ملف الإعدادات."
}

/// Reply for a message the parser could not read.
pub fn unreadable_text() -> &'static str {
    "لم أفهم القيم. مثال:\n1.16506 قمة\n1.16439 قاع\nأو: 1.16439 قاع\n1.16506 قمة"
}
