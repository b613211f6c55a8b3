//! # Cliquoter Core
//!
//! Quote lookup and formatting core for the Simple C-Li Quoter.
//!
//! ## Overview
//!
//! One lookup per run: resolve a ticker against the static exchange table,
//! fetch its raw field record from the provider, and render it through a
//! fixed presentation policy — optionally snapshotting the result to a
//! plain-text report.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo) |
//! | [`data_source`] | Quote source trait and request/error types |
//! | [`domain`] | Domain models ([`Symbol`], [`QuoteRecord`]) |
//! | [`error`] | Validation errors |
//! | [`exchanges`] | Static exchange-code → ticker-suffix table |
//! | [`format`] | Presentation policy (blocks, labels, thresholds) |
//! | [`http_client`] | HTTP client abstraction |
//! | [`report`] | Plain-text report writer |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cliquoter_core::{InfoRequest, QuoteSource, Symbol, YahooAdapter, format};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let symbol = Symbol::resolve("bhp", Some("asx"))?;
//!     let adapter = YahooAdapter::default();
//!     let record = adapter.info(InfoRequest::new(symbol.clone())).await?;
//!     println!("{}", format::render_full(&symbol, &record));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Domain construction returns [`ValidationError`]; adapter calls return
//! structured [`SourceError`] values with stable code strings. There is no
//! retry anywhere: one failed upstream call fails the run.

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod exchanges;
pub mod format;
pub mod http_client;
pub mod report;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::YahooAdapter;

// Data source trait and types
pub use data_source::{InfoRequest, QuoteSource, SourceError, SourceErrorKind};

// Domain models
pub use domain::{display_value, is_falsy, QuoteRecord, Symbol};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Report writer
pub use report::{write_report, ReportError, THANK_YOU_LINE};
