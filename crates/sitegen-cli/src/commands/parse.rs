//! `sitegen parse <INPUT.xml> [OUTPUT.txt]`

use anyhow::{Context, Result};
use sitegen_core::{Config, Summary};
use std::path::Path;
use tracing::debug;

/// Turn the sitemap at `input` back into a priority list.
pub fn execute(config: &Config, input: &Path, output: Option<&Path>) -> Result<Summary> {
    let output = output.unwrap_or(config.defaults.text_output.as_path());
    debug!(input = %input.display(), output = %output.display(), "parse");

    sitegen_core::parse(input, output)
        .with_context(|| format!("could not parse sitemap {}", input.display()))
}
