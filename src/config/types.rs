use serde::Deserialize;

/// Main configuration structure for Gleaner
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub crawl: CrawlConfig,
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Name of the raw page collection
    #[serde(rename = "pages-collection")]
    pub pages_collection: String,

    /// Name of the cleaned text collection
    #[serde(rename = "clean-collection")]
    pub clean_collection: String,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Root sitemap URL to resolve page entries from
    #[serde(rename = "sitemap-url")]
    pub sitemap_url: String,

    /// Delay between requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Hours a stored page stays fresh before it is fetched again
    #[serde(rename = "recrawl-hours")]
    pub recrawl_hours: u64,
}
