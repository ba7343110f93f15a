//! Database schema definitions
//!
//! Collection names come from configuration, so the schema is generated
//! per configured table name rather than kept as a single SQL constant.
//! Names are validated against `[A-Za-z0-9_]+` before they reach this
//! module (see [`validate_collection_name`]).

use crate::storage::traits::StoreError;

/// Checks that a collection name is safe to interpolate into SQL
///
/// # Arguments
///
/// * `name` - The configured collection name
///
/// # Returns
///
/// * `Ok(())` - Name contains only ASCII alphanumerics and underscores
/// * `Err(StoreError::InvalidCollection)` - Anything else
pub fn validate_collection_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(StoreError::InvalidCollection(name.to_string()));
    }
    Ok(())
}

/// Builds the schema SQL for the two collections
pub fn schema_sql(pages_table: &str, clean_table: &str) -> String {
    format!(
        r#"
-- Raw pages, one row per normalized URL
CREATE TABLE IF NOT EXISTS "{pages}" (
    url TEXT PRIMARY KEY,
    html TEXT NOT NULL,
    source TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    last_modified TEXT NOT NULL DEFAULT '',
    etag TEXT NOT NULL DEFAULT ''
);

-- Cleaned text derived from raw pages; rebuilt on every cleaning run
CREATE TABLE IF NOT EXISTS "{clean}" (
    url TEXT PRIMARY KEY,
    clean_text TEXT NOT NULL,
    processed_at INTEGER NOT NULL
);
"#,
        pages = pages_table,
        clean = clean_table
    )
}

/// Initializes the database schema for the configured collection names
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `pages_table` - Raw page collection name (already validated)
/// * `clean_table` - Clean text collection name (already validated)
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(
    conn: &rusqlite::Connection,
    pages_table: &str,
    clean_table: &str,
) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&schema_sql(pages_table, clean_table))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_validate_collection_name() {
        assert!(validate_collection_name("pages").is_ok());
        assert!(validate_collection_name("pages_clean").is_ok());
        assert!(validate_collection_name("Pages2").is_ok());

        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("pages clean").is_err());
        assert!(validate_collection_name("pages\"; DROP TABLE x; --").is_err());
    }

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        let result = initialize_schema(&conn, "pages", "pages_clean");
        assert!(result.is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Initialize twice
        initialize_schema(&conn, "pages", "pages_clean").unwrap();
        let result = initialize_schema(&conn, "pages", "pages_clean");

        // Should succeed the second time too
        assert!(result.is_ok());
    }

    #[test]
    fn test_tables_exist_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn, "raw_docs", "clean_docs").unwrap();

        for table in ["raw_docs", "clean_docs"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table {} should exist", table);
        }
    }
}
