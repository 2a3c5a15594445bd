//! Serialising records into an indented sitemap document.

use crate::types::{SITEMAP_NAMESPACE, Stamp, UrlRecord};
use crate::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Indentation used when writing sitemap XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlStyle {
    /// Character repeated for each nesting level, a space or a tab.
    pub indent_char: u8,
    /// Number of `indent_char`s per level.
    pub indent_width: usize,
}

impl Default for XmlStyle {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_width: 2,
        }
    }
}

/// Write a complete sitemap for `records` into `sink`.
///
/// Every element goes on its own line with children indented per `style`;
/// leaf text stays inline. Records keep their input order.
pub fn write_sitemap<W: Write>(
    sink: W,
    records: &[UrlRecord],
    stamp: &Stamp,
    style: &XmlStyle,
) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, style.indent_char, style.indent_width);
    let lastmod = stamp.lastmod_text();
    let changefreq = stamp.changefreq.as_str();

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_leaf(&mut writer, "loc", &record.location)?;
        write_leaf(&mut writer, "lastmod", &lastmod)?;
        write_leaf(&mut writer, "changefreq", changefreq)?;
        write_leaf(&mut writer, "priority", record.priority.as_str())?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render a sitemap document into a string.
pub fn render_sitemap(records: &[UrlRecord], stamp: &Stamp, style: &XmlStyle) -> Result<String> {
    let mut buf = Vec::new();
    write_sitemap(&mut buf, records, stamp, style)?;
    String::from_utf8(buf).map_err(|e| Error::Format(format!("non UTF-8 output: {e}")))
}

fn write_leaf<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
