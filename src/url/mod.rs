//! URL handling for Gleaner
//!
//! Page identity in the store is the fragment-stripped URL; this module
//! holds that normalization rule.

mod normalize;

pub use normalize::normalize_url;
