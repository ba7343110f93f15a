//! Crawl coordinator
//!
//! Drives one sequential crawl pass: resolve the configured sitemap, then
//! visit every entry in document order. Each entry is normalized, checked
//! against the revisit window, fetched with conditional headers, and
//! persisted. A fixed delay runs after every entry regardless of outcome,
//! so the request rate never exceeds the configured pace even across skips
//! and failures.

use crate::config::Config;
use crate::crawl::fetcher::{fetch_page, FetchOutcome};
use crate::crawl::revisit::should_skip;
use crate::sitemap::resolve_sitemap;
use crate::storage::{DocumentStore, PageRecord};
use crate::url::normalize_url;
use crate::{GleanerError, Result};
use chrono::Utc;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// How one sitemap entry was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// Stored copy is inside the revisit window; nothing was fetched
    Skipped,
    /// Server answered 304; only the stored timestamp moved forward
    Refreshed,
    /// First fetch of this URL; a new record was stored
    Created,
    /// Known URL re-fetched; the stored record was replaced
    Updated,
}

impl fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrawlOutcome::Skipped => "skipped (fresh)",
            CrawlOutcome::Refreshed => "not modified",
            CrawlOutcome::Created => "saved",
            CrawlOutcome::Updated => "updated",
        };
        write!(f, "{}", label)
    }
}

/// Tallies for one crawl pass
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlStats {
    /// Sitemap entries visited
    pub total: usize,
    /// New records stored
    pub created: usize,
    /// Existing records replaced with fresh content
    pub updated: usize,
    /// 304 answers that only refreshed a timestamp
    pub refreshed: usize,
    /// Entries skipped as still fresh
    pub skipped: usize,
    /// Entries that failed to normalize, fetch, or store
    pub failed: usize,
}

impl CrawlStats {
    fn record(&mut self, outcome: CrawlOutcome) {
        match outcome {
            CrawlOutcome::Skipped => self.skipped += 1,
            CrawlOutcome::Refreshed => self.refreshed += 1,
            CrawlOutcome::Created => self.created += 1,
            CrawlOutcome::Updated => self.updated += 1,
        }
    }
}

/// Runs one crawl pass over the configured sitemap
///
/// # Arguments
///
/// * `config` - Validated configuration
/// * `client` - The shared HTTP client
/// * `store` - Document store receiving the fetched pages
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Tallies for the pass; individual entry failures
///   are logged and counted, not propagated
/// * `Err(GleanerError)` - A store-level failure that aborts the pass
pub async fn run_crawl(
    config: &Config,
    client: &Client,
    store: &mut dyn DocumentStore,
) -> Result<CrawlStats> {
    tracing::info!("Resolving sitemap: {}", config.crawl.sitemap_url);
    let entries = resolve_sitemap(client, &config.crawl.sitemap_url).await;
    tracing::info!("Total entries: {}", entries.len());

    let delay = Duration::from_millis(config.crawl.request_delay_ms);
    let total = entries.len();
    let mut stats = CrawlStats {
        total,
        ..CrawlStats::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        match process_entry(client, config, store, entry).await {
            Ok(outcome) => {
                stats.record(outcome);
                tracing::info!("[{}/{}] {}: {}", index + 1, total, entry, outcome);
            }
            Err(e) => {
                stats.failed += 1;
                tracing::warn!("[{}/{}] {}: {}", index + 1, total, entry, e);
            }
        }

        // Pace every entry, successful or not.
        tokio::time::sleep(delay).await;
    }

    tracing::info!(
        "Crawl finished: {} created, {} updated, {} refreshed, {} skipped, {} failed",
        stats.created,
        stats.updated,
        stats.refreshed,
        stats.skipped,
        stats.failed
    );
    Ok(stats)
}

/// Handles a single sitemap entry end to end
async fn process_entry(
    client: &Client,
    config: &Config,
    store: &mut dyn DocumentStore,
    entry: &str,
) -> Result<CrawlOutcome> {
    let normalized = normalize_url(entry)?;
    let url = normalized.as_str();

    let existing = store.find_page(url)?;
    let now = Utc::now().timestamp();

    if should_skip(existing.as_ref(), config.crawl.recrawl_hours, now) {
        return Ok(CrawlOutcome::Skipped);
    }

    match fetch_page(client, url, existing.as_ref()).await {
        FetchOutcome::NotModified => {
            store.touch_page(url, Utc::now().timestamp())?;
            Ok(CrawlOutcome::Refreshed)
        }
        FetchOutcome::Content {
            status,
            body,
            last_modified,
            etag,
        } => {
            if !(200..300).contains(&status) {
                tracing::warn!("HTTP {} for {}, storing body anyway", status, url);
            }
            let record = PageRecord {
                url: url.to_string(),
                html: body,
                source: config.crawl.sitemap_url.clone(),
                timestamp: Utc::now().timestamp(),
                last_modified,
                etag,
            };
            if existing.is_some() {
                store.replace_page(&record)?;
                Ok(CrawlOutcome::Updated)
            } else {
                store.insert_page(&record)?;
                Ok(CrawlOutcome::Created)
            }
        }
        FetchOutcome::Error { message } => Err(GleanerError::Fetch {
            url: url.to_string(),
            message,
        }),
    }
}
