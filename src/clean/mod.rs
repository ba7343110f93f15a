//! Cleaning stage
//!
//! Turns the stored raw HTML into plain text suitable for indexing. The
//! whole clean collection is rebuilt on every run, so its contents always
//! reflect the current raw pages.

mod coordinator;
mod extractor;

pub use coordinator::run_cleaning;
pub use extractor::extract_text;
