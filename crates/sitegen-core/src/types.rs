//! Core data types shared by the text and sitemap sides of a conversion.

use chrono::{Local, NaiveDate};
use std::fmt;

/// XML namespace of the sitemaps.org protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Format used for `<lastmod>` values.
pub const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// A crawler priority hint.
///
/// Keeps the text exactly as written so `0.90` is emitted as `0.90` again;
/// the numeric value is only used for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Priority {
    raw: String,
    value: f64,
}

impl Priority {
    /// Try to read a priority from a single line of text.
    ///
    /// Any line that reads as an `f64` is a priority line, including `inf`
    /// and `NaN`; it is up to the caller to reject those and to check the
    /// range. Returns `None` for everything else.
    pub fn parse_line(line: &str) -> Option<Self> {
        let raw = line.trim();
        if raw.is_empty() {
            return None;
        }
        let value = raw.parse::<f64>().ok()?;
        Some(Self {
            raw: raw.to_string(),
            value,
        })
    }

    /// The priority text as it appeared in the input.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric value.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether the value is neither infinite nor `NaN`.
    pub const fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Whether the value lies in the protocol range `0.0..=1.0`.
    pub fn in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One URL together with the priority carried onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    /// Priority in effect when the URL line was read.
    pub priority: Priority,
    /// The URL, never empty.
    pub location: String,
}

/// Change frequency hints from the sitemap protocol.
///
/// Generation always uses [`ChangeFrequency::Monthly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    #[default]
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// The protocol spelling of this value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata stamped onto every record of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Value written to every `<lastmod>`.
    pub lastmod: NaiveDate,
    /// Value written to every `<changefreq>`.
    pub changefreq: ChangeFrequency,
}

impl Stamp {
    /// Stamp for a run happening now: local calendar date, monthly.
    pub fn today() -> Self {
        Self::on(Local::now().date_naive())
    }

    /// Stamp for a fixed date, monthly.
    pub const fn on(lastmod: NaiveDate) -> Self {
        Self {
            lastmod,
            changefreq: ChangeFrequency::Monthly,
        }
    }

    /// `lastmod` rendered as `YYYY-MM-DD`.
    pub fn lastmod_text(&self) -> String {
        self.lastmod.format(LASTMOD_FORMAT).to_string()
    }
}

/// A `<url>` element read back from a sitemap.
///
/// Fields hold the trimmed, unescaped element text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// `<loc>` text.
    pub loc: String,
    /// `<lastmod>` text.
    pub lastmod: String,
    /// `<changefreq>` text.
    pub changefreq: String,
    /// `<priority>` text, compared as a string when rendering text output.
    pub priority: String,
}
