//! Revisit policy
//!
//! Decides whether a stored page is still fresh enough to skip. The window
//! is measured in whole hours from the record's stored timestamp; a page
//! whose age equals the window exactly is due for a re-fetch.

use crate::storage::PageRecord;

/// Seconds per hour, for converting the configured window
const SECS_PER_HOUR: i64 = 3600;

/// Returns true when the stored record is fresh enough to skip fetching
///
/// # Arguments
///
/// * `existing` - The stored record for this URL, if any
/// * `recrawl_hours` - Configured freshness window in hours
/// * `now` - Current Unix timestamp in seconds
///
/// # Returns
///
/// True only when a record exists and strictly less than the window has
/// elapsed since it was stored. Unknown URLs are never skipped.
pub fn should_skip(existing: Option<&PageRecord>, recrawl_hours: u64, now: i64) -> bool {
    match existing {
        Some(record) => now - record.timestamp < recrawl_hours as i64 * SECS_PER_HOUR,
        None => false,
    }
}
