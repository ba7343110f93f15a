//! Recursive sitemap resolution
//!
//! Resolution turns one root sitemap URL into the flat list of page URLs
//! to crawl. Index entries are followed depth-first, nested results coming
//! before the index's own flat entries, with no deduplication. A branch
//! that cannot be fetched or parsed contributes nothing; the failure stays
//! visible in the logs.

use crate::sitemap::model::{parse_sitemap, SitemapDocument};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// Maximum nesting depth followed through sitemap indexes
///
/// Guards against self-referencing indexes; a branch at this depth is
/// dropped with a warning instead of recursing further.
pub const MAX_SITEMAP_DEPTH: usize = 8;

/// What became of one sitemap document
#[derive(Debug)]
pub enum DocumentOutcome {
    /// At least one location was recovered
    Parsed(SitemapDocument),
    /// The document parsed but held no locations
    Empty,
    /// The document could not be fetched or read
    Failed(String),
}

/// Fetches and parses a single sitemap document
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The sitemap URL to fetch
pub async fn fetch_document(client: &Client, url: &str) -> DocumentOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return DocumentOutcome::Failed(e.to_string()),
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return DocumentOutcome::Failed(e.to_string()),
    };

    let document = parse_sitemap(&body);
    if document.is_empty() {
        DocumentOutcome::Empty
    } else {
        DocumentOutcome::Parsed(document)
    }
}

/// Resolves a sitemap URL into the flat list of page URLs it reaches
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The root sitemap URL
///
/// # Returns
///
/// Page URLs in resolution order: for each index entry, the nested
/// sitemap's results first, then the document's own flat entries. URLs
/// listed more than once appear more than once.
pub async fn resolve_sitemap(client: &Client, url: &str) -> Vec<String> {
    resolve_at_depth(client, url.to_string(), 0).await
}

fn resolve_at_depth(
    client: &Client,
    url: String,
    depth: usize,
) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + '_>> {
    Box::pin(async move {
        if depth >= MAX_SITEMAP_DEPTH {
            tracing::warn!(
                "Sitemap nesting deeper than {}, dropping branch at {}",
                MAX_SITEMAP_DEPTH,
                url
            );
            return Vec::new();
        }

        match fetch_document(client, &url).await {
            DocumentOutcome::Failed(reason) => {
                tracing::warn!("Failed to read sitemap {}: {}", url, reason);
                Vec::new()
            }
            DocumentOutcome::Empty => {
                tracing::debug!("Sitemap {} held no locations", url);
                Vec::new()
            }
            DocumentOutcome::Parsed(document) => {
                let mut urls = Vec::new();
                for nested in document.nested {
                    tracing::debug!("-> {}", nested);
                    urls.extend(resolve_at_depth(client, nested, depth + 1).await);
                }
                urls.extend(document.entries);
                urls
            }
        }
    })
}
