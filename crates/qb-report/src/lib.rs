//! # qb-report
//!
//! The aggregation stage: merges the simulation and benchmark results
//! with the analytical cross-check into flat records, and writes them
//! as delimited tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Report-level error type.
pub mod error;

/// Flattened output records.
pub mod records;

/// CSV emission.
pub mod writer;

pub use error::{ReportError, Result};
pub use records::{SummaryRecord, TerminalStatsRecord};
pub use writer::{ReportWriter, ANALYSIS_RESULTS_FILE, TERMINAL_STATS_FILE};
