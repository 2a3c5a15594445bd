//! `sitegen generate <INPUT.txt> [OUTPUT.xml]`

use anyhow::{Context, Result};
use sitegen_core::{Config, Stamp, Summary};
use std::path::Path;
use tracing::debug;

/// Build a sitemap from the priority list at `input`.
pub fn execute(config: &Config, input: &Path, output: Option<&Path>) -> Result<Summary> {
    let output = output.unwrap_or(config.defaults.sitemap_output.as_path());
    let options = config.generate_options(Stamp::today())?;
    debug!(input = %input.display(), output = %output.display(), "generate");

    sitegen_core::generate(input, output, &options)
        .with_context(|| format!("could not generate a sitemap from {}", input.display()))
}
