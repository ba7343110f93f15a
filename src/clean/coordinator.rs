//! Cleaning coordinator
//!
//! Rebuilds the clean-text collection from the stored raw pages. The pass
//! always starts from an empty collection, so rerunning it after a crawl
//! yields exactly one clean record per page that still has visible text.

use crate::clean::extractor::extract_text;
use crate::storage::{CleanRecord, DocumentStore};
use crate::Result;
use chrono::Utc;

/// Progress is logged every this many processed documents
const PROGRESS_INTERVAL: u64 = 10;

/// Distills every stored page into a clean-text record
///
/// # Arguments
///
/// * `store` - Document store holding the raw pages
///
/// # Returns
///
/// * `Ok(count)` - Number of clean records written; pages with no visible
///   text are skipped and per-page failures are logged, not propagated
/// * `Err(GleanerError)` - Clearing the collection or listing the pages
///   failed, which aborts the pass
pub fn run_cleaning(store: &mut dyn DocumentStore) -> Result<u64> {
    store.clear_clean()?;
    tracing::info!("Cleared previous clean records");

    let urls = store.page_urls()?;
    tracing::info!("Cleaning {} stored pages", urls.len());

    let mut count: u64 = 0;
    for url in &urls {
        let page = match store.find_page(url) {
            Ok(Some(page)) => page,
            Ok(None) => {
                tracing::warn!("Page disappeared during cleaning: {}", url);
                continue;
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", url, e);
                continue;
            }
        };

        let text = extract_text(&page.html);
        if text.is_empty() {
            tracing::debug!("No visible text in {}", url);
            continue;
        }

        let record = CleanRecord {
            url: page.url,
            clean_text: text,
            processed_at: Utc::now().timestamp(),
        };
        if let Err(e) = store.insert_clean(&record) {
            tracing::warn!("Failed to store clean text for {}: {}", record.url, e);
            continue;
        }

        count += 1;
        if count % PROGRESS_INTERVAL == 0 {
            tracing::info!("Processed {} documents", count);
        }
    }

    tracing::info!("Cleaning finished: {} documents", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PageRecord};

    fn page(url: &str, html: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            html: html.to_string(),
            source: "https://example.com/sitemap.xml".to_string(),
            timestamp: 1_000_000,
            last_modified: String::new(),
            etag: String::new(),
        }
    }

    #[test]
    fn test_cleans_stored_pages() {
        let mut store = MemoryStore::default();
        store
            .insert_page(&page("https://example.com/a", "<p>alpha text</p>"))
            .unwrap();
        store
            .insert_page(&page("https://example.com/b", "<p>beta text</p>"))
            .unwrap();

        let count = run_cleaning(&mut store).unwrap();
        assert_eq!(count, 2);

        let records = store.clean_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://example.com/a");
        assert_eq!(records[0].clean_text, "alpha text");
        assert_eq!(records[1].url, "https://example.com/b");
        assert_eq!(records[1].clean_text, "beta text");
    }

    #[test]
    fn test_pages_without_text_get_no_record() {
        let mut store = MemoryStore::default();
        store
            .insert_page(&page("https://example.com/scripted", "<script>x()</script>"))
            .unwrap();
        store
            .insert_page(&page("https://example.com/real", "<p>content</p>"))
            .unwrap();

        let count = run_cleaning(&mut store).unwrap();
        assert_eq!(count, 1);

        let records = store.clean_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://example.com/real");
    }

    #[test]
    fn test_rerun_replaces_previous_records() {
        let mut store = MemoryStore::default();
        store
            .insert_page(&page("https://example.com/a", "<p>stable text</p>"))
            .unwrap();

        run_cleaning(&mut store).unwrap();
        let first = store.clean_records().unwrap();

        run_cleaning(&mut store).unwrap();
        let second = store.clean_records().unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(first[0].url, second[0].url);
        assert_eq!(first[0].clean_text, second[0].clean_text);
        assert_eq!(store.count_clean().unwrap(), 1);
    }

    #[test]
    fn test_empty_store_yields_zero() {
        let mut store = MemoryStore::default();
        assert_eq!(run_cleaning(&mut store).unwrap(), 0);
        assert!(store.clean_records().unwrap().is_empty());
    }
}
