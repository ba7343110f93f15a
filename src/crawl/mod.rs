//! Crawl stage
//!
//! Sequentially fetches every page named by the configured sitemap and
//! stores the raw HTML. Pages already stored within the revisit window are
//! skipped, and stored cache validators turn unchanged pages into cheap
//! 304 round trips.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::config::load_config;
//! use gleaner::crawl::{build_http_client, run_crawl};
//! use gleaner::storage::open_store;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config(Path::new("gleaner.toml"))?;
//!     let mut store = open_store(&config.store)?;
//!     let client = build_http_client()?;
//!     let stats = run_crawl(&config, &client, &mut store).await?;
//!     println!("stored {} new pages", stats.created);
//!     Ok(())
//! }
//! ```

mod coordinator;
mod fetcher;
mod revisit;

pub use coordinator::{run_crawl, CrawlOutcome, CrawlStats};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome, REQUEST_TIMEOUT, USER_AGENT};
pub use revisit::should_skip;
