//! End-to-end pipeline tests: raw message text in, rendered reply out.
//!
//! Each scenario runs the same path the bot and the CLI use:
//! `build_parser` → `analyze` → `render_reply` with a real configuration.

use hilo::models::{HiloConfig, StopLossMode, TradeDirection};
use hilo_engine::format_price;
use rust_decimal_macros::dec;

fn defaults() -> HiloConfig {
    HiloConfig::default()
}

fn analyze(text: &str, config: &HiloConfig) -> hilo::Analysis {
    let parser = hilo::build_parser(config).unwrap();
    hilo::analyze(&parser, text, &config.engine).unwrap()
}

#[test]
fn low_first_message_is_a_buy_at_five_digits() {
    let config = defaults();
    let analysis = analyze("1.16439 قاع\n1.16506 قمة", &config);

    assert_eq!(analysis.direction, TradeDirection::Buy);
    // entry = low + (high - low) * 0.323, exact decimal
    assert_eq!(analysis.computed.entry, dec!(1.16460641));
    // target = high + (entry - low) * 0.786
    assert_eq!(analysis.computed.target, dec!(1.16523009826));

    // Both inputs carried five fractional digits, so the reply renders at
    // five.
    let reply = hilo::render_reply(&analysis, &config.engine);
    assert!(reply.contains("Buy Limit (K)=1.16461"));
    assert!(reply.contains("TP=1.16523"));
    assert!(reply.contains("SL=1.16432"));
}

#[test]
fn high_first_message_is_a_sell() {
    let config = defaults();
    let analysis = analyze("1.16506 قمة\n1.16439 قاع", &config);

    assert_eq!(analysis.direction, TradeDirection::Sell);
    assert_eq!(analysis.computed.entry, dec!(1.16484359));
    assert_eq!(analysis.computed.target, dec!(1.16421990174));

    let reply = hilo::render_reply(&analysis, &config.engine);
    assert!(reply.contains("SELL → Sell Limit (K)=1.16484"));
    assert!(reply.contains("TP=1.16422"));
}

#[test]
fn whole_number_message_renders_whole_numbers() {
    let config = defaults();
    let analysis = analyze("113153 قمة\n112160 قاع", &config);

    assert_eq!(analysis.direction, TradeDirection::Sell);
    let reply = hilo::render_reply(&analysis, &config.engine);
    // No fractional digits in, none out.
    assert!(reply.contains("High(I)=113153 | Low(J)=112160"));
    // entry = 113153 - 993 * 0.323 = 112832.261 -> 112832
    assert!(reply.contains("Sell Limit (K)=112832"));
}

#[test]
fn precision_floor_widens_whole_number_output() {
    let mut config = defaults();
    config.engine.min_fraction_digits = 3;
    let analysis = analyze("113153 قمة\n112160 قاع", &config);

    let reply = hilo::render_reply(&analysis, &config.engine);
    assert!(reply.contains("High(I)=113153.000"));
    assert!(reply.contains("Sell Limit (K)=112832.261"));
}

#[test]
fn explicit_stop_loss_overrides_the_derived_one() {
    let config = defaults();
    let analysis = analyze("1.16506 قمة\n1.16439 قاع\nوقف 113252", &config);

    assert_eq!(analysis.computed.stop_loss, dec!(113252));
    assert_eq!(analysis.computed.stop_loss_fraction_digits, Some(0));

    // Its own precision, not the five digits of the levels.
    let reply = hilo::render_reply(&analysis, &config.engine);
    assert!(reply.contains("SL=113252\n"));
}

#[test]
fn bare_numbers_infer_direction_from_order() {
    let config = defaults();

    let buy = analyze("1.16439 1.16506", &config);
    assert_eq!(buy.direction, TradeDirection::Buy);

    let sell = analyze("1.16506 1.16439", &config);
    assert_eq!(sell.direction, TradeDirection::Sell);
}

#[test]
fn at_extreme_stop_mode_reuses_the_quoted_level() {
    let mut config = defaults();
    config.engine.stop_loss_mode = StopLossMode::AtExtreme;
    let analysis = analyze("1.16506 قمة\n1.16439 قاع", &config);
    assert_eq!(analysis.computed.stop_loss, dec!(1.16506));
}

#[test]
fn reply_survives_a_reformat_round_trip() {
    let config = defaults();
    let analysis = analyze("1.16439 قاع\n1.16506 قمة", &config);

    let entry = format_price(analysis.computed.entry, 5);
    let reparsed = entry.parse().unwrap();
    assert_eq!(format_price(reparsed, 5), entry);
}

#[test]
fn comma_decimals_keep_their_precision() {
    let config = defaults();
    let analysis = analyze("1,5 قمة\n1,2 قاع", &config);

    assert_eq!(analysis.direction, TradeDirection::Sell);
    // entry = 1.5 - 0.3 * 0.323 = 1.4031, rendered at one digit
    assert_eq!(analysis.computed.entry, dec!(1.4031));
    let reply = hilo::render_reply(&analysis, &config.engine);
    assert!(reply.contains("Sell Limit (K)=1.4"));
}
