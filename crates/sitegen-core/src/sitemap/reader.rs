//! Namespace-aware reading of `<urlset>` documents.
//!
//! The namespace of the root element is captured once and the `<url>`
//! children and their fields are matched by that namespace plus local name,
//! so `<urlset xmlns="...">` and `<sm:urlset xmlns:sm="...">` read the same.
//! Elements from other namespaces (image or video extensions) are skipped.

use crate::types::SitemapEntry;
use crate::{Error, Result};
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use tracing::{debug, instrument};

/// Children every `<url>` must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    Lastmod,
    Changefreq,
    Priority,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"loc" => Some(Self::Loc),
            b"lastmod" => Some(Self::Lastmod),
            b"changefreq" => Some(Self::Changefreq),
            b"priority" => Some(Self::Priority),
            _ => None,
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::Loc => "loc",
            Self::Lastmod => "lastmod",
            Self::Changefreq => "changefreq",
            Self::Priority => "priority",
        }
    }
}

#[derive(Debug, Default)]
struct PendingEntry {
    loc: Option<String>,
    lastmod: Option<String>,
    changefreq: Option<String>,
    priority: Option<String>,
}

impl PendingEntry {
    fn set(&mut self, field: Field, text: &str) {
        let value = Some(text.trim().to_string());
        match field {
            Field::Loc => self.loc = value,
            Field::Lastmod => self.lastmod = value,
            Field::Changefreq => self.changefreq = value,
            Field::Priority => self.priority = value,
        }
    }

    fn finish(self, index: usize) -> Result<SitemapEntry> {
        let require = |value: Option<String>, field: Field, allow_empty: bool| {
            match value {
                Some(v) if allow_empty || !v.is_empty() => Ok(v),
                Some(_) => Err(Error::Format(format!(
                    "url entry {index}: <{}> is empty",
                    field.tag()
                ))),
                None => Err(Error::Format(format!(
                    "url entry {index}: missing <{}>",
                    field.tag()
                ))),
            }
        };

        Ok(SitemapEntry {
            loc: require(self.loc, Field::Loc, false)?,
            lastmod: require(self.lastmod, Field::Lastmod, true)?,
            changefreq: require(self.changefreq, Field::Changefreq, true)?,
            priority: require(self.priority, Field::Priority, false)?,
        })
    }
}

/// Event-driven state for one document.
#[derive(Debug, Default)]
struct UrlsetParser {
    entries: Vec<SitemapEntry>,
    /// Namespace of the root element; `Some(None)` for an unprefixed,
    /// undeclared root.
    root_ns: Option<Option<Vec<u8>>>,
    root_closed: bool,
    depth: usize,
    pending: Option<PendingEntry>,
    field: Option<(Field, String)>,
}

impl UrlsetParser {
    fn in_sitemap_ns(&self, ns: &Option<Vec<u8>>) -> bool {
        self.root_ns.as_ref() == Some(ns)
    }

    fn start(&mut self, ns: &Option<Vec<u8>>, local: &[u8]) -> Result<()> {
        if self.root_closed {
            return Err(Error::Format(
                "content found after the root element".to_string(),
            ));
        }
        self.depth += 1;
        match self.depth {
            1 => {
                if local != b"urlset" {
                    return Err(Error::Format(format!(
                        "root element is <{}>, expected <urlset>",
                        String::from_utf8_lossy(local)
                    )));
                }
                self.root_ns = Some(ns.clone());
            },
            2 if local == b"url" && self.in_sitemap_ns(ns) => {
                self.pending = Some(PendingEntry::default());
            },
            3 if self.pending.is_some() && self.in_sitemap_ns(ns) => {
                self.field = Field::from_local_name(local).map(|f| (f, String::new()));
            },
            _ => {},
        }
        Ok(())
    }

    fn end(&mut self, ns: &Option<Vec<u8>>, local: &[u8]) -> Result<()> {
        match self.depth {
            1 => self.root_closed = true,
            2 if local == b"url" && self.in_sitemap_ns(ns) => {
                if let Some(pending) = self.pending.take() {
                    let entry = pending.finish(self.entries.len() + 1)?;
                    self.entries.push(entry);
                }
            },
            3 => {
                if let (Some((field, text)), Some(pending)) =
                    (self.field.take(), self.pending.as_mut())
                {
                    pending.set(field, &text);
                }
            },
            _ => {},
        }
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        if self.depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(Error::Format(
                "text found outside the root element".to_string(),
            ));
        }
        if let Some((_, buf)) = self.field.as_mut() {
            buf.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<SitemapEntry>> {
        if self.root_ns.is_none() {
            return Err(Error::Format("document has no root element".to_string()));
        }
        if self.depth != 0 {
            return Err(Error::Format(
                "document ended inside an open element".to_string(),
            ));
        }
        Ok(self.entries)
    }
}

fn owned_namespace(resolved: ResolveResult<'_>) -> Result<Option<Vec<u8>>> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(ns.as_ref().to_vec())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(Error::Format(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

/// Parse a sitemap document into its `<url>` entries, in document order.
///
/// # Errors
///
/// Returns [`Error::Format`] if the XML is malformed, the root is not
/// `<urlset>`, or an entry lacks one of `loc`, `lastmod`, `changefreq`,
/// `priority` (or has an empty `loc`/`priority`).
///
/// # Examples
///
/// ```
/// use sitegen_core::sitemap::parse_sitemap;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url>
///     <loc>https://example.com/</loc>
///     <lastmod>2024-01-15</lastmod>
///     <changefreq>monthly</changefreq>
///     <priority>0.9</priority>
///   </url>
/// </urlset>"#;
///
/// let entries = parse_sitemap(xml).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].loc, "https://example.com/");
/// assert_eq!(entries[0].priority, "0.9");
/// ```
#[instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_sitemap(xml: &str) -> Result<Vec<SitemapEntry>> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut parser = UrlsetParser::default();

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let ns = owned_namespace(resolved)?;
        match event {
            Event::Start(e) => parser.start(&ns, e.local_name().as_ref())?,
            Event::End(e) => parser.end(&ns, e.local_name().as_ref())?,
            Event::Empty(e) => {
                let local = e.local_name();
                parser.start(&ns, local.as_ref())?;
                parser.end(&ns, local.as_ref())?;
            },
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::Format(format!("XML parse error: {e}")))?;
                parser.text(&text)?;
            },
            Event::CData(e) => {
                let raw = e.into_inner();
                parser.text(&String::from_utf8_lossy(&raw))?;
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let entries = parser.finish()?;
    debug!(entries = entries.len(), "parsed sitemap");
    Ok(entries)
}
