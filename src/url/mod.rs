//! URL normalization and host comparison
//!
//! Normalization here is purely textual: it produces the string key used for
//! deduplication and domain-scope comparison. No syntactic validation or
//! network access is performed.

mod domain;
mod normalize;

pub use domain::{same_host, seed_host};
pub use normalize::normalize_url;
