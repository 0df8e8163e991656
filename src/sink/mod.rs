//! Discovery sink: the external consumer of discovered URLs
//!
//! The engine invokes the sink once per URL that survives dedup and
//! domain-scope filtering, regardless of whether depth or failure limits will
//! allow that URL to be crawled further. Invocations from a single task occur
//! in document order; ordering across tasks is unspecified, so the sink must
//! tolerate concurrent invocation.

use std::sync::Mutex;
use url::Url;

/// Callback invoked once per surviving discovered URL
///
/// Implemented for any `Fn(&Url) + Send + Sync` closure; implement the trait
/// directly when the consumer carries its own state.
pub trait DiscoverySink: Send + Sync {
    /// Reports one discovered URL
    fn on_url(&self, url: &Url);
}

impl<F> DiscoverySink for F
where
    F: Fn(&Url) + Send + Sync,
{
    fn on_url(&self, url: &Url) {
        self(url)
    }
}

/// Sink that accumulates every reported URL in memory
///
/// Used by the CLI and tests to inspect the full discovery set after a crawl
/// completes.
#[derive(Debug, Default)]
pub struct CollectingSink {
    urls: Mutex<Vec<Url>>,
}

impl CollectingSink {
    /// Creates an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every URL reported so far
    pub fn urls(&self) -> Vec<Url> {
        self.urls.lock().unwrap().clone()
    }

    /// Number of sink invocations so far
    pub fn len(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// Whether the sink has received any URL yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiscoverySink for CollectingSink {
    fn on_url(&self, url: &Url) {
        self.urls.lock().unwrap().push(url.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_sink() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let sink = move |_: &Url| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        let url = Url::parse("https://example.com/").unwrap();
        sink.on_url(&url);
        sink.on_url(&url);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();

        sink.on_url(&a);
        sink.on_url(&b);

        assert_eq!(sink.urls(), vec![a, b]);
        assert_eq!(sink.len(), 2);
    }
}
