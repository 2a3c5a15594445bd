//! Error types and handling for sitegen-core operations.
//!
//! Every conversion is a single-shot batch run, so errors are terminal: there
//! is no partial-success mode and nothing here is retried.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: unreadable inputs, unwritable outputs
//! - **Format Errors**: text input without a leading priority line, malformed
//!   or structurally wrong sitemap XML
//! - **Usage Errors**: preconditions on paths the caller supplied
//! - **Configuration Errors**: invalid settings files
//!
//! ```rust
//! use sitegen_core::{Error, generate_str, GenerateOptions};
//!
//! match generate_str("https://example.com/\n", &GenerateOptions::default()) {
//!     Err(Error::Format(msg)) => assert!(msg.contains("line 1")),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for sitegen-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers opening, reading and writing the files named by the caller,
    /// including the scratch file used while merging.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input does not follow the expected format.
    ///
    /// ## Common Causes
    ///
    /// - First non-blank line of a text list is not a priority
    /// - Priority outside `0.0..=1.0` while strict checking is on
    /// - Sitemap XML is not well-formed
    /// - A `<url>` entry lacks one of its mandatory children
    #[error("Format error: {0}")]
    Format(String),

    /// The caller violated a precondition on its arguments.
    ///
    /// Used for the `.xml` suffix requirement on the sitemap being merged into.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(io) => Self::Io(std::io::Error::new(io.kind(), io.to_string())),
            other => Self::Format(format!("XML parse error: {other}")),
        }
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// - `"io"` - File system operations
    /// - `"format"` - Text or XML content problems
    /// - `"usage"` - Argument preconditions
    /// - `"config"` - Settings files
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Format(_) => "format",
            Self::Usage(_) => "usage",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
