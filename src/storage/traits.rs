//! Store traits and error types
//!
//! This module defines the trait interface for document store backends and
//! associated error types.

use crate::storage::{CleanRecord, PageRecord};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Duplicate page URL: {0}")]
    DuplicateUrl(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for document store backends
///
/// The store holds two independently addressed collections: raw pages keyed
/// by normalized URL, and cleaned text derived from them. The crawl
/// pipeline owns all writes to the page collection; the cleaning pipeline
/// owns all writes to the clean collection.
pub trait DocumentStore {
    // ===== Raw pages =====

    /// Gets the stored page for a normalized URL, if any
    fn find_page(&self, url: &str) -> StoreResult<Option<PageRecord>>;

    /// Inserts a new page record
    ///
    /// The record's URL must not already be present; use
    /// [`replace_page`](Self::replace_page) to overwrite an existing record.
    fn insert_page(&mut self, record: &PageRecord) -> StoreResult<()>;

    /// Inserts or fully replaces the record stored under the record's URL
    fn replace_page(&mut self, record: &PageRecord) -> StoreResult<()>;

    /// Updates only the fetch timestamp of an existing page
    ///
    /// Used when the server reports the stored copy is still current: the
    /// HTML and validators stay untouched.
    fn touch_page(&mut self, url: &str, timestamp: i64) -> StoreResult<()>;

    /// Lists every stored page URL in insertion order
    ///
    /// Callers stream large collections by scanning keys and fetching one
    /// record at a time instead of materializing every record.
    fn page_urls(&self) -> StoreResult<Vec<String>>;

    /// Counts stored pages
    fn count_pages(&self) -> StoreResult<u64>;

    // ===== Clean text =====

    /// Deletes every record in the clean text collection
    fn clear_clean(&mut self) -> StoreResult<()>;

    /// Inserts a cleaned text record
    fn insert_clean(&mut self, record: &CleanRecord) -> StoreResult<()>;

    /// Lists every cleaned text record in insertion order
    fn clean_records(&self) -> StoreResult<Vec<CleanRecord>>;

    /// Counts cleaned text records
    fn count_clean(&self) -> StoreResult<u64>;
}
