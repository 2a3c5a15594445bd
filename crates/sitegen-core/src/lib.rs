//! # sitegen-core
//!
//! Conversion between a compact URL priority list and the sitemaps.org XML
//! protocol.
//!
//! ## Architecture
//!
//! - **Types**: priorities, URL records, the per-run stamp, sitemap entries
//! - **Text**: the lazy line reader with priority carry-forward, and the
//!   collapsing text writer
//! - **Sitemap**: indented XML writer and namespace-aware reader
//! - **Convert**: the generate, parse and merge operations over files
//! - **Storage**: atomic output and the merge scratch file
//! - **Configuration**: optional TOML settings
//!
//! ## Quick Start
//!
//! ```rust
//! use sitegen_core::{GenerateOptions, generate_str, parse_str};
//!
//! let text = "0.9\nhttps://example.com/\n\n0.5\nhttps://example.com/about\n";
//! let xml = generate_str(text, &GenerateOptions::default())?;
//! assert!(xml.contains("<priority>0.5</priority>"));
//!
//! assert_eq!(parse_str(&xml)?, "0.9\nhttps://example.com/\n0.5\nhttps://example.com/about\n");
//! # Ok::<(), sitegen_core::Error>(())
//! ```

/// Settings loaded from TOML
pub mod config;
/// Generate, parse and merge
pub mod convert;
/// Error types and result aliases
pub mod error;
/// Sitemap XML reading and writing
pub mod sitemap;
/// Atomic writes and scratch files
pub mod storage;
/// The line-oriented URL list format
pub mod text;
/// Core data types
pub mod types;

pub use config::{Config, DefaultsConfig, FormatConfig};
pub use convert::{
    GenerateOptions, Summary, check_sitemap_suffix, generate, generate_str, merge, parse,
    parse_str,
};
pub use error::{Error, Result};
pub use sitemap::{XmlStyle, parse_sitemap, render_sitemap};
pub use text::{RecordReader, TextOptions, read_records, render_text};
pub use types::{ChangeFrequency, Priority, SITEMAP_NAMESPACE, SitemapEntry, Stamp, UrlRecord};
