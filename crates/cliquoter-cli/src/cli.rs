//! CLI argument definitions for the Simple C-Li Quoter.
//!
//! One flat command: look up a symbol, print the summary, optionally answer
//! a single-field query or write a report file.
//!
//! | Flag | Effect |
//! |------|--------|
//! | `-s, --symbol SYMBOL` | Ticker symbol (mandatory) |
//! | `-e, --exchange EXCHANGE` | Exchange or market code, looked up in the suffix table |
//! | `-r, --report` | Write a `.txt` report to the working directory |
//! | `-q, --query FIELD` | Print a single field instead of the full summary |
//!
//! Argument values are case-insensitive.

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Simple C-Li Quoter - fetch a security quote and print a formatted summary
#[derive(Debug, Parser)]
#[command(
    name = "cliquoter",
    author,
    version,
    about = "Fetch a security quote and print a formatted summary",
    long_about = "Fetches a quote for a ticker symbol from Yahoo Finance and prints a \
formatted summary: descriptive metadata first, the priced market metrics next, and \
every remaining field after that.\n\
\n\
Argument values are case-insensitive. If the exchange is omitted the symbol defaults \
to US markets; for currencies pass --exchange global."
)]
pub struct Cli {
    /// Ticker symbol to look up (mandatory, case-insensitive).
    #[arg(short = 's', long, value_parser = NonEmptyStringValueParser::new())]
    pub symbol: String,

    /// Exchange or market code (e.g. ASX, HKEX). For currencies, pass
    /// 'global'. Unknown codes are ignored and the plain symbol is used.
    #[arg(short = 'e', long)]
    pub exchange: Option<String>,

    /// Create a .txt report of the summary in the current working directory.
    #[arg(short = 'r', long, default_value_t = false)]
    pub report: bool,

    /// Query a single field from the data (no spaces). No report is written
    /// with this option; if the field is not found the full summary is
    /// shown instead.
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}
