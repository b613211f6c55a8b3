//! Plain-text report snapshots of a formatted quote.
//!
//! A report is the already-rendered summary body wrapped in a fixed banner,
//! a generation stamp, and closing lines, written once to
//! `Quote_<SYMBOL>_<YYYY-MM-DD_HH-MM-SS>.txt` in the target directory.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::format_description;
use time::OffsetDateTime;

use crate::domain::Symbol;

const BANNER: &str = "SIMPLE C-LI QUOTER";
const RULE_WIDTH: usize = 37;
const CLOSING_LINE: &str = " -- End of report.";

/// Printed on every successful run and at the bottom of every report.
pub const THANK_YOU_LINE: &str = "Thank you for using the Simple C-Li Quoter!";

const FILE_STAMP: &str = "[year]-[month]-[day]_[hour]-[minute]-[second]";
const HEADER_STAMP: &str = "[hour]:[minute]:[second] [day]-[month]-[year]";

/// Report writing failures. All fatal; there is no partial-write recovery.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid report timestamp layout: {0}")]
    Layout(#[from] time::error::InvalidFormatDescription),
    #[error("failed to format report timestamp: {0}")]
    Format(#[from] time::error::Format),
}

/// Write the formatted body to a report file under `dir`, stamped with
/// `now`, and return the path of the created file.
///
/// The body is expected to end with a newline (as
/// [`render_full`](crate::format::render_full) guarantees).
pub fn write_report(
    dir: &Path,
    symbol: &Symbol,
    body: &str,
    now: OffsetDateTime,
) -> Result<PathBuf, ReportError> {
    let file_stamp = format_description::parse(FILE_STAMP)?;
    let header_stamp = format_description::parse(HEADER_STAMP)?;

    let path = dir.join(format!("Quote_{}_{}.txt", symbol, now.format(&file_stamp)?));
    let mut file = File::create(&path)?;

    writeln!(file, "{BANNER}")?;
    writeln!(file)?;
    writeln!(file, "Report generated: {}", now.format(&header_stamp)?)?;
    writeln!(file, "{}", "_".repeat(RULE_WIDTH))?;
    writeln!(file)?;
    file.write_all(body.as_bytes())?;
    writeln!(file)?;
    writeln!(file, "{CLOSING_LINE}")?;
    writeln!(file)?;
    writeln!(file, "{THANK_YOU_LINE}")?;

    Ok(path)
}
