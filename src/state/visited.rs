use std::collections::HashSet;
use std::sync::Mutex;

/// Concurrency-safe set of normalized URLs already seen during a crawl
///
/// The registry only grows: an entry, once inserted, is never removed for the
/// lifetime of the crawl. The insert is atomic with respect to the
/// already-present check, so two branches discovering the same URL
/// concurrently cannot both treat it as novel.
#[derive(Debug, Default)]
pub struct VisitRegistry {
    inner: Mutex<HashSet<String>>,
}

impl VisitRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically records a normalized URL, returning whether it was novel
    ///
    /// Returns `true` exactly once per distinct normalized URL across all
    /// concurrently running tasks; every later call for the same URL returns
    /// `false`.
    pub fn try_visit(&self, normalized: &str) -> bool {
        let mut seen = self.inner.lock().unwrap();
        seen.insert(normalized.to_string())
    }

    /// Number of distinct normalized URLs recorded so far
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Whether no URL has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_visit_is_novel() {
        let registry = VisitRegistry::new();
        assert!(registry.try_visit("https://example.com/page"));
    }

    #[test]
    fn test_second_visit_is_not_novel() {
        let registry = VisitRegistry::new();
        assert!(registry.try_visit("https://example.com/page"));
        assert!(!registry.try_visit("https://example.com/page"));
    }

    #[test]
    fn test_distinct_urls_are_independent() {
        let registry = VisitRegistry::new();
        assert!(registry.try_visit("https://example.com/a"));
        assert!(registry.try_visit("https://example.com/b"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_visits_single_winner() {
        let registry = Arc::new(VisitRegistry::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                registry.try_visit("https://example.com/contested")
            }));
        }

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }
}
