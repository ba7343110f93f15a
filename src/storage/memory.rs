//! In-memory store implementation
//!
//! A HashMap-backed DocumentStore used by tests and ephemeral runs. Key
//! scans preserve insertion order to match the SQLite backend.

use crate::storage::traits::{DocumentStore, StoreError, StoreResult};
use crate::storage::{CleanRecord, PageRecord};
use std::collections::HashMap;

/// In-memory store backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, PageRecord>,
    page_order: Vec<String>,
    clean: HashMap<String, CleanRecord>,
    clean_order: Vec<String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    // ===== Raw pages =====

    fn find_page(&self, url: &str) -> StoreResult<Option<PageRecord>> {
        Ok(self.pages.get(url).cloned())
    }

    fn insert_page(&mut self, record: &PageRecord) -> StoreResult<()> {
        if self.pages.contains_key(&record.url) {
            return Err(StoreError::DuplicateUrl(record.url.clone()));
        }
        self.page_order.push(record.url.clone());
        self.pages.insert(record.url.clone(), record.clone());
        Ok(())
    }

    fn replace_page(&mut self, record: &PageRecord) -> StoreResult<()> {
        if !self.pages.contains_key(&record.url) {
            self.page_order.push(record.url.clone());
        }
        self.pages.insert(record.url.clone(), record.clone());
        Ok(())
    }

    fn touch_page(&mut self, url: &str, timestamp: i64) -> StoreResult<()> {
        if let Some(record) = self.pages.get_mut(url) {
            record.timestamp = timestamp;
        }
        Ok(())
    }

    fn page_urls(&self) -> StoreResult<Vec<String>> {
        Ok(self.page_order.clone())
    }

    fn count_pages(&self) -> StoreResult<u64> {
        Ok(self.pages.len() as u64)
    }

    // ===== Clean text =====

    fn clear_clean(&mut self) -> StoreResult<()> {
        self.clean.clear();
        self.clean_order.clear();
        Ok(())
    }

    fn insert_clean(&mut self, record: &CleanRecord) -> StoreResult<()> {
        if self.clean.contains_key(&record.url) {
            return Err(StoreError::DuplicateUrl(record.url.clone()));
        }
        self.clean_order.push(record.url.clone());
        self.clean.insert(record.url.clone(), record.clone());
        Ok(())
    }

    fn clean_records(&self) -> StoreResult<Vec<CleanRecord>> {
        Ok(self
            .clean_order
            .iter()
            .filter_map(|url| self.clean.get(url).cloned())
            .collect())
    }

    fn count_clean(&self) -> StoreResult<u64> {
        Ok(self.clean.len() as u64)
    }
}
