//! Formatting-policy properties exercised over hand-built records
//!
//! Companion to the journey tests: these pin down the presentation rules
//! (consumption, falsy handling, prefix suppression, label shapes) against
//! records crafted to hit each edge.

use cliquoter_core::{format, QuoteRecord, Symbol};
use serde_json::json;

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbol should be valid")
}

#[test]
fn priority_fields_print_even_when_their_values_are_falsy() {
    // A halted instrument can legitimately report zero bid/ask.
    let record = QuoteRecord::from_fields([
        ("longName", json!("Halted Corp.")),
        ("currency", json!("USD")),
        ("regularMarketPrice", json!(12.5)),
        ("bid", json!(0)),
        ("ask", json!(0)),
        ("volume", json!(0)),
        ("beta", json!(1.1)),
    ]);

    let body = format::render_full(&symbol("HLT"), &record);

    assert!(body.contains("Bid: 0\n"));
    assert!(body.contains("Ask: 0\n"));
    assert!(body.contains("Volume: 0\n"));
}

#[test]
fn remaining_block_skips_falsy_values_of_every_shape() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Sparse Corp.")),
        ("aEmpty", json!("")),
        ("bNull", json!(null)),
        ("cZero", json!(0)),
        ("dFalse", json!(false)),
        ("eList", json!([])),
        ("fReal", json!(3.2)),
    ]);

    let body = format::render_full(&symbol("SPRS"), &record);

    assert!(!body.contains("AEmpty:"));
    assert!(!body.contains("BNull:"));
    assert!(!body.contains("CZero:"));
    assert!(!body.contains("DFalse:"));
    assert!(!body.contains("EList:"));
    assert!(body.contains("FReal: 3.2\n"));
}

#[test]
fn regular_prefixed_fields_outside_the_priority_table_are_suppressed() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Prefix Corp.")),
        ("regularMarketChange", json!(0.74)),
        ("regularMarketChangePercent", json!(1.04)),
        ("regularMarketTime", json!(1_700_000_000)),
        ("beta", json!(0.9)),
    ]);

    let body = format::render_full(&symbol("PFX"), &record);

    assert!(!body.contains("RegularMarketChange"));
    assert!(!body.contains("RegularMarketTime"));
    assert!(body.contains("Beta: 0.9\n"));
}

#[test]
fn every_ignore_listed_key_is_kept_out_of_the_remaining_block() {
    let mut record = QuoteRecord::from_fields([("longName", json!("Ignore Corp."))]);
    for key in format::IGNORED_FIELDS {
        record.insert(*key, json!("some value"));
    }

    let body = format::render_full(&symbol("IGN"), &record);
    let remaining = body
        .rsplit(format::SEPARATOR)
        .next()
        .expect("summary has a trailing block");

    for key in format::IGNORED_FIELDS {
        let mut label = key.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        assert!(
            !remaining.contains(&format!("{label}: ")),
            "'{key}' leaked into the remaining block"
        );
    }
}

#[test]
fn introduction_and_priority_consumption_prevents_duplicates() {
    // 'currency' sits in the introduction table, 'volume' in the priority
    // table; neither may surface again in the free-form remainder.
    let record = QuoteRecord::from_fields([
        ("longName", json!("Dup Corp.")),
        ("currency", json!("AUD")),
        ("volume", json!(42_000)),
        ("beta", json!(1.4)),
    ]);

    let body = format::render_full(&symbol("DUP"), &record);

    assert_eq!(body.matches("Currency: AUD").count(), 1);
    assert_eq!(body.matches("42000").count(), 1);
    assert_eq!(body.matches("Volume:").count(), 1);
}

#[test]
fn introduction_order_is_fixed_regardless_of_record_order() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Ordered Corp.")),
        ("currency", json!("USD")),
        ("website", json!("https://ordered.example.com")),
        ("sector", json!("Utilities")),
        ("country", json!("Canada")),
    ]);

    let body = format::render_full(&symbol("ORD"), &record);

    let website = body.find("Website: ").expect("present");
    let country = body.find("Country: ").expect("present");
    let sector = body.find("Sector: ").expect("present");
    let currency = body.find("Currency: ").expect("present");
    assert!(website < country && country < sector && sector < currency);
}

#[test]
fn priority_labels_are_the_hand_picked_ones() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Labels Corp.")),
        ("regularMarketPrice", json!(101.5)),
        ("regularMarketPreviousClose", json!(100.0)),
        ("trailingPE", json!(18.4)),
        ("marketCap", json!(9_000_000_000_u64)),
    ]);

    let body = format::render_full(&symbol("LBL"), &record);

    assert!(body.contains("CurrentPrice: 101.5\n"));
    assert!(body.contains("PreviousClose: 100.0\n"));
    assert!(body.contains("PriceEarnings: 18.4\n"));
    assert!(body.contains("MarketCap: 9000000000\n"));
    // Raw keys never appear as labels.
    assert!(!body.contains("RegularMarketPrice:"));
    assert!(!body.contains("TrailingPE:"));
}

#[test]
fn free_form_labels_capitalize_only_the_first_character() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Case Corp.")),
        ("fiftyDayAverage", json!(99.1)),
        ("sharesOutstanding", json!(1_000_000)),
    ]);

    let body = format::render_full(&symbol("CASE"), &record);

    assert!(body.contains("FiftyDayAverage: 99.1\n"));
    assert!(body.contains("SharesOutstanding: 1000000\n"));
    assert!(!body.contains("Fiftydayaverage:"));
}

#[test]
fn query_preserves_the_stored_key_spelling_in_its_label() {
    let record = QuoteRecord::from_fields([
        ("longName", json!("Query Corp.")),
        ("payoutRatio", json!(0.25)),
    ]);

    let out = format::render_query(&symbol("QRY"), &record, "payoutratio")
        .expect("query should match");
    assert_eq!(out, "Query Corp. (QRY)\nPayoutRatio: 0.25\n");
}

#[test]
fn empty_blocks_still_render_their_separators() {
    // Ten junk fields clear the threshold upstream but none of them belong
    // to a fixed table, so both fixed blocks render empty.
    let record = QuoteRecord::from_fields(
        (0..10).map(|i| (format!("zCustom{i}"), json!(i + 1))),
    );

    let body = format::render_full(&symbol("JNK"), &record);

    assert_eq!(body.matches(format::SEPARATOR).count(), 3);
    assert!(body.starts_with("JNK (JNK)\n"));
    assert!(body.contains("ZCustom3: 4\n"));
}
