//! Settings for conversions, loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard behaviour: `sitemap.xml` / `parsedSitemap.txt` outputs, two-space
//! indentation and strict priority checking.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [defaults]
//! sitemap_output = "public/sitemap.xml"
//! text_output = "urls.txt"
//!
//! [format]
//! indent_width = 1
//! indent_char = "\t"
//! strict_priority = false
//! ```
//!
//! ```rust
//! use sitegen_core::Config;
//!
//! let config = Config::from_toml_str("[format]\nindent_width = 4\n")?;
//! assert_eq!(config.format.indent_width, 4);
//! assert_eq!(config.defaults.sitemap_output.to_str(), Some("sitemap.xml"));
//! # Ok::<(), sitegen_core::Error>(())
//! ```

use crate::convert::GenerateOptions;
use crate::sitemap::XmlStyle;
use crate::text::TextOptions;
use crate::types::Stamp;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default output path for generated and merged sitemaps.
pub const DEFAULT_SITEMAP_OUTPUT: &str = "sitemap.xml";

/// Default output path for parsed text lists.
pub const DEFAULT_TEXT_OUTPUT: &str = "parsedSitemap.txt";

/// Largest accepted `indent_width`.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output locations.
    pub defaults: DefaultsConfig,
    /// Output formatting and input validation.
    pub format: FormatConfig,
}

/// Output paths used when the command line does not name one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Output of `generate` and `add`.
    pub sitemap_output: PathBuf,
    /// Output of `parse`.
    pub text_output: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sitemap_output: PathBuf::from(DEFAULT_SITEMAP_OUTPUT),
            text_output: PathBuf::from(DEFAULT_TEXT_OUTPUT),
        }
    }
}

/// Formatting of written sitemaps and strictness of text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Indent characters per nesting level.
    pub indent_width: usize,
    /// Indent character, `" "` or `"\t"`.
    pub indent_char: String,
    /// Reject priorities outside `0.0..=1.0`.
    pub strict_priority: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            indent_char: " ".to_string(),
            strict_priority: true,
        }
    }
}

impl Config {
    /// Load and validate settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.format.indent_byte()?;
        if self.format.indent_width > MAX_INDENT_WIDTH {
            return Err(Error::Config(format!(
                "indent_width must be at most {MAX_INDENT_WIDTH}, got {}",
                self.format.indent_width
            )));
        }
        if self.defaults.sitemap_output.as_os_str().is_empty()
            || self.defaults.text_output.as_os_str().is_empty()
        {
            return Err(Error::Config("default output paths must not be empty".to_string()));
        }
        Ok(())
    }

    /// Options for a generate or merge run stamped with `stamp`.
    pub fn generate_options(&self, stamp: Stamp) -> Result<GenerateOptions> {
        Ok(GenerateOptions {
            stamp,
            style: XmlStyle {
                indent_char: self.format.indent_byte()?,
                indent_width: self.format.indent_width,
            },
            text: TextOptions {
                strict_priority: self.format.strict_priority,
            },
        })
    }
}

impl FormatConfig {
    fn indent_byte(&self) -> Result<u8> {
        match self.indent_char.as_str() {
            " " => Ok(b' '),
            "\t" => Ok(b'\t'),
            other => Err(Error::Config(format!(
                "indent_char must be a single space or tab, got {other:?}"
            ))),
        }
    }
}
