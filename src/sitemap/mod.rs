//! Sitemap resolution for Gleaner
//!
//! This module turns a root sitemap URL into the flat list of page URLs to
//! crawl, following nested sitemap indexes depth-first:
//! - Both document shapes (`<urlset>` and `<sitemapindex>`) are parsed
//!   leniently from the same body
//! - Nested results come before a document's own flat entries
//! - No deduplication; recursion depth is bounded

mod model;
mod resolver;

pub use model::{parse_sitemap, SitemapDocument};
pub use resolver::{fetch_document, resolve_sitemap, DocumentOutcome, MAX_SITEMAP_DEPTH};
