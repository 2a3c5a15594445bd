//! `sitegen add <INPUT.txt> <SITEMAP.xml> [OUTPUT.xml]`

use anyhow::{Context, Result};
use sitegen_core::{Config, Stamp, Summary, check_sitemap_suffix};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CliError;

/// Append the URLs listed in `input` to `sitemap`.
///
/// Without `output` the configured default (`sitemap.xml`) is written, which
/// replaces `sitemap` itself when both name the same file.
pub fn execute(
    config: &Config,
    input: &Path,
    sitemap: &Path,
    output: Option<&Path>,
) -> Result<Summary> {
    check_sitemap_suffix(sitemap).map_err(CliError::usage)?;

    let output = output.unwrap_or(config.defaults.sitemap_output.as_path());
    if same_file(output, sitemap) {
        warn!(path = %output.display(), "existing sitemap will be replaced");
    }
    let options = config.generate_options(Stamp::today())?;
    debug!(
        input = %input.display(),
        sitemap = %sitemap.display(),
        output = %output.display(),
        "add"
    );

    sitegen_core::merge(input, sitemap, output, &options).with_context(|| {
        format!(
            "could not add {} to {}",
            input.display(),
            sitemap.display()
        )
    })
}

/// Whether two paths name the same file, resolving `.`/`..` and symlinks
/// when both exist.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
