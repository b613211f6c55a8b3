//! Presentation policy for quote summaries.
//!
//! A summary is three blocks over one raw record: a fixed-order
//! introduction (descriptive metadata), a fixed-order priority block
//! (market metrics with hand-picked labels), and an alphabetical free-form
//! block for everything else. Rendering a field consumes it from the
//! working set, so no key ever appears in more than one block.

use serde_json::Value;

use crate::domain::{display_value, is_falsy, QuoteRecord, Symbol};

/// Block separator line.
pub const SEPARATOR: &str = "  ----  ";

/// A provider record must carry at least this many fields to count as a
/// real security rather than an empty/error placeholder.
pub const MIN_USABLE_FIELDS: usize = 10;

/// Fixed-order introduction fields with their display labels.
pub const INTRODUCTION_FIELDS: &[(&str, &str)] = &[
    ("website", "Website"),
    ("country", "Country"),
    ("sector", "Sector"),
    ("industry", "Industry"),
    ("quoteType", "Type"),
    ("exchange", "Exchange"),
    ("currency", "Currency"),
];

/// Fixed-order market metrics shown ahead of the free-form block.
pub const PRIORITY_FIELDS: &[(&str, &str)] = &[
    ("regularMarketPrice", "CurrentPrice"),
    ("bid", "Bid"),
    ("ask", "Ask"),
    ("regularMarketOpen", "Open"),
    ("regularMarketPreviousClose", "PreviousClose"),
    ("regularMarketDayHigh", "DayHigh"),
    ("regularMarketDayLow", "DayLow"),
    ("trailingPE", "PriceEarnings"),
    ("marketCap", "MarketCap"),
    ("volume", "Volume"),
];

/// Keys never shown in the free-form block: names and boilerplate already
/// covered elsewhere, plus the un-prefixed duplicates of priority metrics.
/// The `regularMarket*` family is excluded separately by prefix.
pub const IGNORED_FIELDS: &[&str] = &[
    "longName",
    "shortName",
    "name",
    "symbol",
    "description",
    "longBusinessSummary",
    "logo_url",
    "phone",
    "address1",
    "address2",
    "state",
    "city",
    "zip",
    "fax",
    "gmtOffSetMilliseconds",
    "lastMarket",
    "maxAge",
    "messageBoardId",
    "market",
    "fullTimeEmployees",
    "twitter",
    "exchangeTimezoneName",
    "exchangeTimezoneShortName",
    "financialCurrency",
    "currentPrice",
    "open",
    "previousClose",
    "dayHigh",
    "dayLow",
];

const SUPERSEDED_PREFIX: &str = "regular";

/// Name header: the first non-falsy of `longName` and `shortName`, falling
/// back to the symbol itself, rendered as `<name> (<SYMBOL>)`.
pub fn display_name(record: &QuoteRecord, symbol: &Symbol) -> String {
    let name = [record.get("longName"), record.get("shortName")]
        .into_iter()
        .flatten()
        .find(|value| !is_falsy(value))
        .map(display_value)
        .unwrap_or_else(|| symbol.as_str().to_owned());
    format!("{name} ({symbol})")
}

/// Render the full three-block summary. The returned body ends with a
/// newline after its last field line.
pub fn render_full(symbol: &Symbol, record: &QuoteRecord) -> String {
    let mut working = record.clone();
    let mut out = String::new();

    out.push_str(&display_name(record, symbol));
    out.push('\n');

    push_separator(&mut out);
    for (key, label) in INTRODUCTION_FIELDS {
        push_labeled(&mut out, &mut working, key, label);
    }

    push_separator(&mut out);
    for (key, label) in PRIORITY_FIELDS {
        push_labeled(&mut out, &mut working, key, label);
    }

    push_separator(&mut out);
    for (key, value) in working.iter() {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if key.starts_with(SUPERSEDED_PREFIX) {
            continue;
        }
        if is_falsy(value) {
            continue;
        }
        push_line(&mut out, &capitalize(key), value);
    }

    out
}

/// Render a single queried field, matched case-insensitively against the
/// record's keys: the name header plus one labeled line. `None` when no
/// key matches.
pub fn render_query(symbol: &Symbol, record: &QuoteRecord, query: &str) -> Option<String> {
    let key = record.find_key_ignore_case(query)?;
    let value = record.get(key)?;

    let mut out = String::new();
    out.push_str(&display_name(record, symbol));
    out.push('\n');
    push_line(&mut out, &capitalize(key), value);
    Some(out)
}

fn push_separator(out: &mut String) {
    out.push_str(SEPARATOR);
    out.push('\n');
}

/// Present-only, consume-on-render: falsy values still print here, the
/// presence of the key is what counts.
fn push_labeled(out: &mut String, working: &mut QuoteRecord, key: &str, label: &str) {
    if let Some(value) = working.take(key) {
        push_line(out, label, &value);
    }
}

fn push_line(out: &mut String, label: &str, value: &Value) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&display_value(value));
    out.push('\n');
}

/// First character upper-cased, remainder untouched (`trailingPE` becomes
/// `TrailingPE`, not `Trailingpe`).
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => {
            let mut label = String::with_capacity(field.len());
            label.push(first.to_ascii_uppercase());
            label.push_str(chars.as_str());
            label
        }
        None => String::new(),
    }
}
