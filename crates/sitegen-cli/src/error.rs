//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments (also clap's own usage errors) |
//! | 3 | `Format` | Malformed text list or sitemap |
//! | 4 | `Io` | Unreadable input or unwritable output |
//! | 5 | `Config` | Invalid settings file |
//!
//! ```bash
//! sitegen generate urls.txt
//! case $? in
//!     0) echo "Done" ;;
//!     3) echo "Fix the list format" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;
use std::process::ExitCode;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,
    /// Invalid arguments (exit code 2).
    Usage = 2,
    /// Input content is malformed (exit code 3).
    Format = 3,
    /// File could not be read or written (exit code 4).
    Io = 4,
    /// Settings file is invalid (exit code 5).
    Config = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::Format => "format error",
            Self::Io => "I/O error",
            Self::Config => "configuration error",
        }
    }

    /// Category for an error raised by the core library.
    #[must_use]
    pub const fn from_core(err: &sitegen_core::Error) -> Self {
        match err {
            sitegen_core::Error::Io(_) => Self::Io,
            sitegen_core::Error::Format(_) => Self::Format,
            sitegen_core::Error::Usage(_) => Self::Usage,
            sitegen_core::Error::Config(_) => Self::Config,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// Looks for a [`CliError`] or a core error anywhere in the chain and falls
/// back to [`ErrorCategory::Internal`].
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
        if let Some(core_err) = cause.downcast_ref::<sitegen_core::Error>() {
            return ErrorCategory::from_core(core_err).exit_code();
        }
    }
    ErrorCategory::Internal.exit_code()
}
