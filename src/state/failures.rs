use std::sync::atomic::{AtomicU32, Ordering};

/// Concurrency-safe counter of server-error responses, shared crawl-wide
///
/// The counter is monotonically non-decreasing. `record_failure` and
/// `below_limit` are linearizable with respect to each other: no concurrent
/// increment is lost, and a check observes a value at least as large as any
/// increment that happened before it.
///
/// Only 5xx responses are recorded here. Transport-level failures terminate
/// their branch without touching the counter.
#[derive(Debug)]
pub struct FailureGovernor {
    count: AtomicU32,
    limit: u32,
}

impl FailureGovernor {
    /// Creates a governor tolerating `limit` server errors
    pub fn new(limit: u32) -> Self {
        Self {
            count: AtomicU32::new(0),
            limit,
        }
    }

    /// Atomically records one failure
    ///
    /// Returns the new count and whether it meets or exceeds the limit.
    pub fn record_failure(&self) -> (u32, bool) {
        let count = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        (count, count >= self.limit)
    }

    /// Non-mutating gate checked before each fetch attempt
    pub fn below_limit(&self) -> bool {
        self.count.load(Ordering::SeqCst) < self.limit
    }

    /// Current failure count
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_below_limit() {
        let governor = FailureGovernor::new(3);
        assert!(governor.below_limit());
        assert_eq!(governor.count(), 0);
    }

    #[test]
    fn test_record_reports_count_and_exceeded() {
        let governor = FailureGovernor::new(2);

        assert_eq!(governor.record_failure(), (1, false));
        assert_eq!(governor.record_failure(), (2, true));
        assert!(!governor.below_limit());
    }

    #[test]
    fn test_limit_one_trips_immediately() {
        let governor = FailureGovernor::new(1);
        let (count, exceeded) = governor.record_failure();
        assert_eq!(count, 1);
        assert!(exceeded);
    }

    #[test]
    fn test_count_keeps_growing_past_limit() {
        let governor = FailureGovernor::new(1);
        governor.record_failure();
        let (count, exceeded) = governor.record_failure();
        assert_eq!(count, 2);
        assert!(exceeded);
    }

    #[test]
    fn test_concurrent_increments_none_lost() {
        let governor = Arc::new(FailureGovernor::new(1000));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let governor = Arc::clone(&governor);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    governor.record_failure();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(governor.count(), 800);
    }
}
