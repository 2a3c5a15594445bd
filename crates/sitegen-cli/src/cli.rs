//! # CLI Structure and Argument Parsing
//!
//! `sitegen` follows a command-subcommand pattern built with `clap` derive
//! macros:
//!
//! ```bash
//! # Build a sitemap from a priority list (writes sitemap.xml)
//! sitegen generate urls.txt
//!
//! # Read a sitemap back into a priority list (writes parsedSitemap.txt)
//! sitegen parse sitemap.xml
//!
//! # Append new URLs to an existing sitemap, overwriting it in place
//! sitegen add new-urls.txt sitemap.xml
//! ```
//!
//! Wrong argument counts and unknown subcommands are rejected by clap with a
//! usage message and exit status 2.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `sitegen` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sitegen")]
#[command(version)]
#[command(
    about = "sitegen - convert URL priority lists to and from XML sitemaps",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colors in output (also respects `NO_COLOR`)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a TOML settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for the `sitegen` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Generate a sitemap from a priority list
    Generate {
        /// Text file with priority lines and URL lines
        #[arg(value_name = "INPUT.txt")]
        input: PathBuf,
        /// Sitemap to write (default: sitemap.xml)
        #[arg(value_name = "OUTPUT.xml")]
        output: Option<PathBuf>,
    },

    /// Turn a sitemap back into a priority list
    Parse {
        /// Sitemap to read
        #[arg(value_name = "INPUT.xml")]
        input: PathBuf,
        /// Text file to write (default: parsedSitemap.txt)
        #[arg(value_name = "OUTPUT.txt")]
        output: Option<PathBuf>,
    },

    /// Append the URLs of a priority list to an existing sitemap
    ///
    /// Every entry, old and new, is stamped with today's date. Without an
    /// explicit output the result goes to sitemap.xml, which replaces the
    /// input sitemap when that is the file being extended.
    Add {
        /// Text file with the new URLs
        #[arg(value_name = "INPUT.txt")]
        input: PathBuf,
        /// Existing sitemap, must end in .xml
        #[arg(value_name = "SITEMAP.xml")]
        sitemap: PathBuf,
        /// Sitemap to write (default: sitemap.xml)
        #[arg(value_name = "OUTPUT.xml")]
        output: Option<PathBuf>,
    },
}
