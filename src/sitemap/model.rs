//! Sitemap document shapes
//!
//! A sitemap body is tried against both shapes the protocol allows: a flat
//! `<urlset>` of page locations and a `<sitemapindex>` of nested sitemap
//! locations. The root tag is not validated; a body matching neither shape
//! simply produces no locations, and a hard deserialization failure is
//! treated the same way.

use quick_xml::de::from_str;
use serde::Deserialize;

/// Flat sitemap: `<urlset><url><loc>...</loc></url>...</urlset>`
#[derive(Debug, Default, Deserialize)]
struct UrlSet {
    #[serde(default, rename = "url")]
    urls: Vec<Location>,
}

/// Sitemap index: `<sitemapindex><sitemap><loc>...</loc></sitemap>...</sitemapindex>`
#[derive(Debug, Default, Deserialize)]
struct SitemapIndex {
    #[serde(default, rename = "sitemap")]
    sitemaps: Vec<Location>,
}

/// A single `<loc>` entry inside either shape
#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(default)]
    loc: String,
}

/// Locations recovered from one sitemap document
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    /// Nested sitemap locations, in document order
    pub nested: Vec<String>,
    /// Page locations, in document order
    pub entries: Vec<String>,
}

impl SitemapDocument {
    /// True when the document yielded no locations of either kind
    pub fn is_empty(&self) -> bool {
        self.nested.is_empty() && self.entries.is_empty()
    }
}

/// Parses a sitemap body into its nested and flat locations
///
/// Both shapes are tried against the same body; a well-formed document
/// matches at most one. Parse failures are logged at debug level and
/// contribute nothing, so callers cannot distinguish "no content" from
/// "unparseable" without the logs.
pub fn parse_sitemap(body: &str) -> SitemapDocument {
    let nested = match from_str::<SitemapIndex>(body) {
        Ok(index) => index.sitemaps.into_iter().map(|s| s.loc).collect(),
        Err(e) => {
            tracing::debug!("Sitemap index parse failed: {}", e);
            Vec::new()
        }
    };

    let entries = match from_str::<UrlSet>(body) {
        Ok(urlset) => urlset.urls.into_iter().map(|u| u.loc).collect(),
        Err(e) => {
            tracing::debug!("Urlset parse failed: {}", e);
            Vec::new()
        }
    };

    SitemapDocument { nested, entries }
}
