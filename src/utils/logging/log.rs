//! Log lines for table files
//!
//! Every table read or write logs a start line and a completion line with the
//! row count, so runs over many files can be followed in the log.

use std::path::Path;
use std::time::Duration;

/// Direction of a table file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIo {
    Read,
    Write,
}

impl TableIo {
    const fn ongoing(self) -> &'static str {
        match self {
            Self::Read => "Reading",
            Self::Write => "Writing",
        }
    }

    const fn done(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Wrote",
        }
    }
}

pub fn log_table_started(io: TableIo, path: &Path) {
    log::info!("{} {}", io.ongoing(), path.display());
}

/// Completion line with row count and wall time
pub fn log_table_finished(io: TableIo, path: &Path, rows: usize, elapsed: Duration) {
    log::info!("{} {rows} rows ({}) in {elapsed:.2?}", io.done(), path.display());
}
