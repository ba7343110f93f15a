//! Conditional HTTP fetcher
//!
//! Builds the shared HTTP client and performs the per-page GET. When a
//! stored record carries cache validators, they are sent as
//! `If-Modified-Since` / `If-None-Match` so an unchanged page costs only a
//! 304. Any status other than 304 is treated as content: the body and the
//! response's validators are returned as-is, error pages included.

use crate::storage::PageRecord;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("gleaner/", env!("CARGO_PKG_VERSION"));

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 304: the stored copy is still current
    NotModified,

    /// The server returned a body (any status other than 304)
    Content {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
        /// `Last-Modified` response header, empty when absent
        last_modified: String,
        /// `ETag` response header, empty when absent
        etag: String,
    },

    /// Transport failure; nothing usable came back
    Error {
        /// Error description
        message: String,
    },
}

/// Builds the HTTP client shared by sitemap resolution and page fetching
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page, revalidating against a prior record when possible
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The normalized page URL
/// * `prior` - The stored record for this URL, if any; its non-empty
///   validators are sent as conditional headers
///
/// # Returns
///
/// A FetchOutcome classifying the response
pub async fn fetch_page(client: &Client, url: &str, prior: Option<&PageRecord>) -> FetchOutcome {
    let mut request = client.get(url);

    if let Some(record) = prior {
        if !record.last_modified.is_empty() {
            request = request.header("If-Modified-Since", record.last_modified.as_str());
        }
        if !record.etag.is_empty() {
            request = request.header("If-None-Match", record.etag.as_str());
        }
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::Error {
                message: e.to_string(),
            }
        }
    };

    let status = response.status();
    if status == StatusCode::NOT_MODIFIED {
        return FetchOutcome::NotModified;
    }

    let last_modified = header_value(&response, "last-modified");
    let etag = header_value(&response, "etag");

    match response.text().await {
        Ok(body) => FetchOutcome::Content {
            status: status.as_u16(),
            body,
            last_modified,
            etag,
        },
        Err(e) => FetchOutcome::Error {
            message: e.to_string(),
        },
    }
}

/// Reads a response header as a string, empty when absent or non-ASCII
fn header_value(response: &Response, name: &str) -> String {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
