//! The one-shot quote flow: resolve, fetch, format, emit, report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use time::OffsetDateTime;

use cliquoter_core::{
    format, report, InfoRequest, QuoteSource, ReqwestHttpClient, Symbol, YahooAdapter,
};

use crate::cli::Cli;
use crate::error::CliError;

/// What a lookup produced: the text for stdout and the report file, if one
/// was written.
#[derive(Debug)]
pub struct Emitted {
    pub stdout: String,
    pub report_path: Option<PathBuf>,
}

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let provider = YahooAdapter::with_http_client(Arc::new(ReqwestHttpClient::new()));
    let emitted = execute(cli, &provider, Path::new(".")).await?;
    print!("{}", emitted.stdout);
    Ok(())
}

/// The flow behind [`run`], with the provider and report directory injected
/// so tests can use the offline adapter and a scratch directory.
pub async fn execute(
    cli: &Cli,
    provider: &dyn QuoteSource,
    report_dir: &Path,
) -> Result<Emitted, CliError> {
    let symbol = Symbol::resolve(&cli.symbol, cli.exchange.as_deref())?;
    let record = provider.info(InfoRequest::new(symbol.clone())).await?;

    if record.len() < format::MIN_USABLE_FIELDS {
        return Err(CliError::NoData);
    }

    if let Some(query) = cli.query.as_deref().filter(|field| !field.is_empty()) {
        // Query mode never writes a report, found or not.
        return match format::render_query(&symbol, &record, query) {
            Some(single) => Ok(Emitted {
                stdout: single,
                report_path: None,
            }),
            None => Ok(Emitted {
                stdout: format!(
                    "Query field not found! Displaying full data for {symbol} instead...\n\n{}\n",
                    format::render_full(&symbol, &record),
                ),
                report_path: None,
            }),
        };
    }

    let body = format::render_full(&symbol, &record);
    let mut report_path = None;
    if cli.report {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        report_path = Some(report::write_report(report_dir, &symbol, &body, now)?);
    }

    Ok(Emitted {
        stdout: format!("{body}\n"),
        report_path,
    })
}
