//! Static exchange-code to ticker-suffix table.
//!
//! Yahoo disambiguates non-US listings by appending a venue suffix to the
//! base ticker (`BHP` on ASX is `BHP.AX`). Currencies use the `GLOBAL`
//! pseudo-exchange (`AUDUSD` becomes `AUDUSD=X`). An empty suffix means the
//! plain symbol already addresses that venue.

/// Exchange code → ticker suffix.
pub const EXCHANGES: &[(&str, &str)] = &[
    ("ASX", ".AX"),
    ("CBOT", ".CBT"),
    ("CME", ".CME"),
    ("COMEX", ".CMX"),
    ("GLOBAL", "=X"),
    ("HKEX", ".HK"),
    ("KOSDAQ", ".KQ"),
    ("KSE", ".KS"),
    ("NASDAQ", ""),
    ("NYMEX", ".NYM"),
    ("NZX", ".NZ"),
    ("OPRA", ""),
    ("SGX", ".SI"),
    ("SIX", ".SW"),
    ("SSE", ".SS"),
    ("TSX", ".TO"),
    ("TWSE", ".TW"),
];

/// Case-insensitive suffix lookup. Unknown or blank codes resolve to `None`.
pub fn suffix_for(code: &str) -> Option<&'static str> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    EXCHANGES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(code))
        .map(|(_, suffix)| *suffix)
}
