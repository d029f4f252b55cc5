//! Report-level error type.
//!
//! Writing the output tables is the only stage that touches the
//! filesystem, so I/O and CSV failures surface here.  All are fatal.

use thiserror::Error;

/// Errors raised while aggregating or writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output directory or file could not be created or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A computation error bubbled up from the core crates.
    #[error(transparent)]
    Core(#[from] qb_core::errors::Error),
}

/// Shorthand `Result` for report operations.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;
