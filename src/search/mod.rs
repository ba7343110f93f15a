//! Search stage
//!
//! Builds an in-memory inverted index over the clean-text collection and
//! answers boolean queries against it from an interactive console. The
//! index is rebuilt from the store on every run; nothing is persisted.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner::config::load_config;
//! use gleaner::search::{build_index, run_console};
//! use gleaner::storage::open_store;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = load_config(Path::new("gleaner.toml"))?;
//!     let store = open_store(&config.store)?;
//!     let (index, urls) = build_index(&store)?;
//!     run_console(&index, &urls)?;
//!     Ok(())
//! }
//! ```

mod console;
mod index;
mod tokenize;

pub use console::run_console;
pub use index::{build_index, SearchIndex};
pub use tokenize::{stem, tokenize};
