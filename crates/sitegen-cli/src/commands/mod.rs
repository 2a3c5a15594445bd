//! Command implementations for the sitegen CLI
//!
//! Each subcommand lives in its own module and returns the [`Summary`] of
//! what it wrote; printing is left to the caller.
//!
//! [`Summary`]: sitegen_core::Summary

mod add;
mod generate;
mod parse;

pub use add::execute as add_urls;
pub use generate::execute as generate_sitemap;
pub use parse::execute as parse_sitemap;
