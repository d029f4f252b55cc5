//! Pipeline configuration.
//!
//! All parameters are fixed constants; the pipeline takes no
//! command-line arguments.  The only runtime override is the output
//! directory, via the `QUANTBENCH_OUTPUT_DIR` environment variable.

use qb_pricing::SimulationParameters;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "QUANTBENCH_OUTPUT_DIR";

/// Default output directory for the result tables.
pub const DEFAULT_OUTPUT_DIR: &str = "/app/output";

/// Full configuration of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Market and discretisation parameters for the simulation.
    pub parameters: SimulationParameters,
    /// Side length of the benchmark matrices.
    pub matrix_size: usize,
    /// Side length of the eigenvalue sub-block.
    pub eigen_block_size: usize,
    /// RNG seed shared by both stages, for reproducible runs.
    pub seed: u64,
    /// Directory the result tables are written to.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parameters: SimulationParameters::default(),
            matrix_size: 5000,
            eigen_block_size: 1000,
            seed: 42,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl PipelineConfig {
    /// Default configuration with the output directory taken from
    /// `QUANTBENCH_OUTPUT_DIR` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var(OUTPUT_DIR_ENV) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }
}
