//! SQLite store implementation
//!
//! This module provides a SQLite-based implementation of the DocumentStore
//! trait. Each configured collection maps to one table.

use crate::storage::schema::{initialize_schema, validate_collection_name};
use crate::storage::traits::{DocumentStore, StoreError, StoreResult};
use crate::storage::{CleanRecord, PageRecord};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite store backend
pub struct SqliteStore {
    conn: Connection,
    pages_table: String,
    clean_table: String,
}

impl SqliteStore {
    /// Opens or creates the database at the given path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    /// * `pages_table` - Raw page collection name
    /// * `clean_table` - Clean text collection name
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(StoreError)` - Invalid collection name or failed to open
    pub fn open(path: &Path, pages_table: &str, clean_table: &str) -> Result<Self, StoreError> {
        validate_collection_name(pages_table)?;
        validate_collection_name(clean_table)?;

        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA mmap_size = 268435456;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn, pages_table, clean_table)?;

        Ok(Self {
            conn,
            pages_table: pages_table.to_string(),
            clean_table: clean_table.to_string(),
        })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory(pages_table: &str, clean_table: &str) -> Result<Self, StoreError> {
        validate_collection_name(pages_table)?;
        validate_collection_name(clean_table)?;

        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn, pages_table, clean_table)?;

        Ok(Self {
            conn,
            pages_table: pages_table.to_string(),
            clean_table: clean_table.to_string(),
        })
    }

    fn map_duplicate(err: rusqlite::Error, url: &str) -> StoreError {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateUrl(url.to_string())
            }
            other => StoreError::Sqlite(other),
        }
    }
}

impl DocumentStore for SqliteStore {
    // ===== Raw pages =====

    fn find_page(&self, url: &str) -> StoreResult<Option<PageRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT url, html, source, timestamp, last_modified, etag FROM \"{}\" WHERE url = ?1",
            self.pages_table
        ))?;

        let page = stmt
            .query_row(params![url], |row| {
                Ok(PageRecord {
                    url: row.get(0)?,
                    html: row.get(1)?,
                    source: row.get(2)?,
                    timestamp: row.get(3)?,
                    last_modified: row.get(4)?,
                    etag: row.get(5)?,
                })
            })
            .optional()?;

        Ok(page)
    }

    fn insert_page(&mut self, record: &PageRecord) -> StoreResult<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO \"{}\" (url, html, source, timestamp, last_modified, etag)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    self.pages_table
                ),
                params![
                    record.url,
                    record.html,
                    record.source,
                    record.timestamp,
                    record.last_modified,
                    record.etag
                ],
            )
            .map_err(|e| Self::map_duplicate(e, &record.url))?;
        Ok(())
    }

    fn replace_page(&mut self, record: &PageRecord) -> StoreResult<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO \"{}\" (url, html, source, timestamp, last_modified, etag)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(url) DO UPDATE SET
                     html = excluded.html,
                     source = excluded.source,
                     timestamp = excluded.timestamp,
                     last_modified = excluded.last_modified,
                     etag = excluded.etag",
                self.pages_table
            ),
            params![
                record.url,
                record.html,
                record.source,
                record.timestamp,
                record.last_modified,
                record.etag
            ],
        )?;
        Ok(())
    }

    fn touch_page(&mut self, url: &str, timestamp: i64) -> StoreResult<()> {
        self.conn.execute(
            &format!(
                "UPDATE \"{}\" SET timestamp = ?2 WHERE url = ?1",
                self.pages_table
            ),
            params![url, timestamp],
        )?;
        Ok(())
    }

    fn page_urls(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT url FROM \"{}\" ORDER BY rowid",
            self.pages_table
        ))?;

        let urls = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(urls)
    }

    fn count_pages(&self) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", self.pages_table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    // ===== Clean text =====

    fn clear_clean(&mut self) -> StoreResult<()> {
        self.conn
            .execute(&format!("DELETE FROM \"{}\"", self.clean_table), [])?;
        Ok(())
    }

    fn insert_clean(&mut self, record: &CleanRecord) -> StoreResult<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO \"{}\" (url, clean_text, processed_at) VALUES (?1, ?2, ?3)",
                    self.clean_table
                ),
                params![record.url, record.clean_text, record.processed_at],
            )
            .map_err(|e| Self::map_duplicate(e, &record.url))?;
        Ok(())
    }

    fn clean_records(&self) -> StoreResult<Vec<CleanRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT url, clean_text, processed_at FROM \"{}\" ORDER BY rowid",
            self.clean_table
        ))?;

        let records = stmt
            .query_map([], |row| {
                Ok(CleanRecord {
                    url: row.get(0)?,
                    clean_text: row.get(1)?,
                    processed_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn count_clean(&self) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", self.clean_table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> SqliteStore {
        SqliteStore::open_in_memory("pages", "pages_clean").unwrap()
    }

    fn sample_page(url: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            html: "<html><body>hello</body></html>".to_string(),
            source: "https://example.com/sitemap.xml".to_string(),
            timestamp: 1_700_000_000,
            last_modified: "Wed, 01 Nov 2023 00:00:00 GMT".to_string(),
            etag: "\"abc\"".to_string(),
        }
    }

    #[test]
    fn test_insert_and_find_page() {
        let mut store = test_store();
        let record = sample_page("https://example.com/a");

        store.insert_page(&record).unwrap();
        let found = store.find_page("https://example.com/a").unwrap().unwrap();

        assert_eq!(found.url, record.url);
        assert_eq!(found.html, record.html);
        assert_eq!(found.source, record.source);
        assert_eq!(found.timestamp, record.timestamp);
        assert_eq!(found.last_modified, record.last_modified);
        assert_eq!(found.etag, record.etag);
    }

    #[test]
    fn test_find_missing_page() {
        let store = test_store();
        assert!(store.find_page("https://example.com/nope").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = test_store();
        let record = sample_page("https://example.com/a");

        store.insert_page(&record).unwrap();
        let result = store.insert_page(&record);

        assert!(matches!(result, Err(StoreError::DuplicateUrl(_))));
    }

    #[test]
    fn test_replace_page_overwrites() {
        let mut store = test_store();
        let mut record = sample_page("https://example.com/a");
        store.insert_page(&record).unwrap();

        record.html = "<html><body>changed</body></html>".to_string();
        record.timestamp = 1_700_000_999;
        store.replace_page(&record).unwrap();

        let found = store.find_page("https://example.com/a").unwrap().unwrap();
        assert_eq!(found.html, record.html);
        assert_eq!(found.timestamp, 1_700_000_999);
        assert_eq!(store.count_pages().unwrap(), 1);
    }

    #[test]
    fn test_touch_page_only_updates_timestamp() {
        let mut store = test_store();
        let record = sample_page("https://example.com/a");
        store.insert_page(&record).unwrap();

        store.touch_page("https://example.com/a", 1_700_009_999).unwrap();

        let found = store.find_page("https://example.com/a").unwrap().unwrap();
        assert_eq!(found.timestamp, 1_700_009_999);
        assert_eq!(found.html, record.html);
        assert_eq!(found.last_modified, record.last_modified);
        assert_eq!(found.etag, record.etag);
    }

    #[test]
    fn test_page_urls_in_insertion_order() {
        let mut store = test_store();
        store.insert_page(&sample_page("https://example.com/c")).unwrap();
        store.insert_page(&sample_page("https://example.com/a")).unwrap();
        store.insert_page(&sample_page("https://example.com/b")).unwrap();

        let urls = store.page_urls().unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com/c",
                "https://example.com/a",
                "https://example.com/b"
            ]
        );
    }

    #[test]
    fn test_clean_roundtrip_and_clear() {
        let mut store = test_store();
        let record = CleanRecord {
            url: "https://example.com/a".to_string(),
            clean_text: "hello world".to_string(),
            processed_at: 1_700_000_000,
        };

        store.insert_clean(&record).unwrap();
        assert_eq!(store.count_clean().unwrap(), 1);

        let records = store.clean_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, record.url);
        assert_eq!(records[0].clean_text, record.clean_text);

        store.clear_clean().unwrap();
        assert_eq!(store.count_clean().unwrap(), 0);
        assert!(store.clean_records().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_collection_name_rejected() {
        let result = SqliteStore::open_in_memory("pages; DROP TABLE x", "clean");
        assert!(matches!(result, Err(StoreError::InvalidCollection(_))));
    }

    #[test]
    fn test_custom_collection_names() {
        let mut store = SqliteStore::open_in_memory("raw_docs", "distilled").unwrap();
        store.insert_page(&sample_page("https://example.com/a")).unwrap();
        assert_eq!(store.count_pages().unwrap(), 1);
        assert_eq!(store.count_clean().unwrap(), 0);
    }
}
