//! Sitemap XML serialisation and parsing.
//!
//! - **Writing**: [`write_sitemap`] / [`render_sitemap`] turn [`UrlRecord`]s
//!   into an indented `<urlset>` document, stamping every entry with one
//!   [`Stamp`].
//! - **Reading**: [`parse_sitemap`] returns each `<url>` as a
//!   [`SitemapEntry`] with its fields kept as text.
//!
//! [`UrlRecord`]: crate::types::UrlRecord
//! [`Stamp`]: crate::types::Stamp
//! [`SitemapEntry`]: crate::types::SitemapEntry

mod reader;
mod writer;

pub use reader::parse_sitemap;
pub use writer::{XmlStyle, render_sitemap, write_sitemap};
