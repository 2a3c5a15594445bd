//! The three conversions: generate, parse and merge.
//!
//! Each file-level operation reads its input completely, converts in memory,
//! and only then writes the output in one atomic step. A format error
//! therefore never produces or truncates an output file.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sitegen_core::{GenerateOptions, Stamp, generate_str, parse_str};
//!
//! let options = GenerateOptions {
//!     stamp: Stamp::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
//!     ..GenerateOptions::default()
//! };
//! let xml = generate_str("0.9\nhttps://example.com/\n", &options)?;
//! assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
//! assert_eq!(parse_str(&xml)?, "0.9\nhttps://example.com/\n");
//! # Ok::<(), sitegen_core::Error>(())
//! ```

use crate::sitemap::{XmlStyle, parse_sitemap, render_sitemap};
use crate::storage::{self, ScratchFile};
use crate::text::{TextOptions, read_records, render_text};
use crate::types::{Stamp, UrlRecord};
use crate::{Error, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for one generate or merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Stamp applied to every entry of the run.
    pub stamp: Stamp,
    /// Output indentation.
    pub style: XmlStyle,
    /// Text list validation.
    pub text: TextOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            stamp: Stamp::today(),
            style: XmlStyle::default(),
            text: TextOptions::default(),
        }
    }
}

/// Outcome of a file-level operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Where the result was written.
    pub output: PathBuf,
    /// Number of URLs written.
    pub records: usize,
}

/// Check that `path` names an `.xml` file.
///
/// Merging only accepts sitemaps by name; the content is not sniffed.
pub fn check_sitemap_suffix(path: &Path) -> Result<()> {
    let is_xml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if is_xml {
        Ok(())
    } else {
        Err(Error::Usage(format!(
            "sitemap path must end in .xml, got {}",
            path.display()
        )))
    }
}

fn records_to_xml(records: &[UrlRecord], options: &GenerateOptions) -> Result<String> {
    render_sitemap(records, &options.stamp, &options.style)
}

fn generate_from_reader<R: BufRead>(reader: R, options: &GenerateOptions) -> Result<(String, usize)> {
    let records = read_records(reader, options.text)?;
    debug!(records = records.len(), "read text records");
    let xml = records_to_xml(&records, options)?;
    Ok((xml, records.len()))
}

/// Convert a text list into a sitemap document.
pub fn generate_str(text: &str, options: &GenerateOptions) -> Result<String> {
    generate_from_reader(text.as_bytes(), options).map(|(xml, _)| xml)
}

/// Convert the text list at `input` into a sitemap at `output`.
///
/// Nothing is written when the input is rejected.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn generate(input: &Path, output: &Path, options: &GenerateOptions) -> Result<Summary> {
    info!("reading input file");
    let reader = storage::open_reader(input)?;
    let (xml, records) = generate_from_reader(reader, options)?;

    info!(records, "writing sitemap");
    storage::write_atomic(output, xml.as_bytes())?;

    Ok(Summary {
        output: output.to_path_buf(),
        records,
    })
}

/// Convert a sitemap document back into a text list.
///
/// `lastmod` and `changefreq` are dropped; a priority line is written only
/// where the priority text changes.
pub fn parse_str(xml: &str) -> Result<String> {
    let entries = parse_sitemap(xml)?;
    Ok(render_text(&entries))
}

/// Convert the sitemap at `input` into a text list at `output`.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn parse(input: &Path, output: &Path) -> Result<Summary> {
    info!("reading sitemap");
    let xml = storage::read_text(input)?;
    let entries = parse_sitemap(&xml)?;
    let text = render_text(&entries);

    info!(records = entries.len(), "writing text list");
    storage::write_atomic(output, text.as_bytes())?;

    Ok(Summary {
        output: output.to_path_buf(),
        records: entries.len(),
    })
}

/// Append the URLs listed in `new_urls` to the sitemap at `sitemap` and
/// write the combined sitemap to `output`.
///
/// The existing entries are parsed back into text, the new list is appended
/// byte for byte in a scratch file beside `output`, and the result is
/// generated with a fresh stamp for every entry. `output` may be the same
/// path as `sitemap`. The scratch file is removed whether or not the run
/// succeeds.
#[instrument(skip_all, fields(
    new_urls = %new_urls.display(),
    sitemap = %sitemap.display(),
    output = %output.display(),
))]
pub fn merge(
    new_urls: &Path,
    sitemap: &Path,
    output: &Path,
    options: &GenerateOptions,
) -> Result<Summary> {
    check_sitemap_suffix(sitemap)?;

    info!("parsing existing sitemap");
    let existing = parse_str(&storage::read_text(sitemap)?)?;

    let mut scratch = ScratchFile::create_in(&storage::parent_dir(output))?;
    scratch.append(existing.as_bytes())?;
    let appended = scratch.append_file(new_urls)?;
    scratch.flush()?;
    debug!(
        existing_bytes = existing.len(),
        appended_bytes = appended,
        "assembled merge input"
    );

    generate(scratch.path(), output, options)
}
