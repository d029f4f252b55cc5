//! quantbench entry point.

use anyhow::Result;
use quantbench::{run, PipelineConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PipelineConfig::from_env();
    run(&config)?;
    Ok(())
}
