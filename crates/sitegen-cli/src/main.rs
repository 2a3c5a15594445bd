//! sitegen CLI entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    sitegen_cli::run()
}
