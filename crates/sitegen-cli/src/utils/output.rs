//! User-facing status lines.

use colored::Colorize;
use sitegen_core::Summary;

/// Report a finished conversion on stdout.
pub fn print_summary(summary: &Summary, quiet: bool) {
    if quiet {
        return;
    }
    let noun = if summary.records == 1 { "URL" } else { "URLs" };
    println!(
        "{} Saved {} {noun} to {}",
        "✓".green(),
        summary.records,
        summary.output.display()
    );
}

/// Report a fatal error on stderr, including its cause chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
