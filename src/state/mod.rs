//! Shared concurrency-safe crawl state
//!
//! The visit registry and failure governor are the only mutable state shared
//! across concurrently running crawl tasks. Both grow monotonically for the
//! lifetime of one crawl invocation.

mod failures;
mod visited;

pub use failures::FailureGovernor;
pub use visited::VisitRegistry;
