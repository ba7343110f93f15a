//! Store module for persisting crawl data
//!
//! This module handles persistence for both pipelines:
//! - Raw pages keyed by normalized URL, with HTTP cache validators
//! - Cleaned plain-text documents derived from those pages
//!
//! Backends implement the [`DocumentStore`] trait; the SQLite backend is
//! used by the binary, the in-memory backend by tests.

mod memory;
mod schema;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{DocumentStore, StoreError, StoreResult};

use crate::config::StoreConfig;
use std::path::Path;

/// Opens the store described by the configuration
///
/// # Arguments
///
/// * `config` - The `[store]` section of the configuration
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Successfully opened store
/// * `Err(StoreError)` - Invalid collection name or failed to open
pub fn open_store(config: &StoreConfig) -> Result<SqliteStore, StoreError> {
    SqliteStore::open(
        Path::new(&config.database_path),
        &config.pages_collection,
        &config.clean_collection,
    )
}

/// A raw page as stored in the page collection
///
/// One record per normalized URL. `last_modified` and `etag` hold the
/// server's cache validators verbatim; an empty string means the server
/// did not send the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub html: String,
    pub source: String,
    pub timestamp: i64,
    pub last_modified: String,
    pub etag: String,
}

/// A cleaned text document as stored in the clean collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    pub url: String,
    pub clean_text: String,
    pub processed_at: i64,
}
