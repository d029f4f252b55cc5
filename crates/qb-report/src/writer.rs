//! CSV emission.
//!
//! Each table is one header row plus one data row, written to a fixed
//! filename inside the configured output directory.  The directory is
//! created on first write if absent.

use crate::error::Result;
use crate::records::{SummaryRecord, TerminalStatsRecord};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Filename of the one-row summary table.
pub const ANALYSIS_RESULTS_FILE: &str = "analysis_results.csv";

/// Filename of the terminal-price distribution table.
pub const TERMINAL_STATS_FILE: &str = "terminal_price_stats.csv";

/// Writes the two result tables into an output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir`.  The directory is not
    /// touched until the first write.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the summary table; returns the path written.
    pub fn write_summary(&self, record: &SummaryRecord) -> Result<PathBuf> {
        self.write_one(ANALYSIS_RESULTS_FILE, record)
    }

    /// Write the terminal-distribution table; returns the path written.
    pub fn write_terminal_stats(&self, record: &TerminalStatsRecord) -> Result<PathBuf> {
        self.write_one(TERMINAL_STATS_FILE, record)
    }

    fn write_one<T: Serialize>(&self, filename: &str, record: &T) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        let mut writer = csv::Writer::from_path(&path)?;
        writer.serialize(record)?;
        writer.flush()?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }
}
