//! Shared helpers for the CLI commands.

mod logging;
mod output;

pub use logging::initialize_logging;
pub use output::{print_error, print_summary};
