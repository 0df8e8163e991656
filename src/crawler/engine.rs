//! The recursive crawl engine
//!
//! Each crawl task performs one fetch-and-expand step: gate on the failure
//! governor and the depth bound, fetch the page, extract the surviving links,
//! report each to the sink, then fork one child task per link and wait for
//! the whole subtree to complete. Tasks are plain data spawned onto the tokio
//! runtime rather than stack-recursive calls, so fan-out depth is bounded by
//! the crawl limits, not the call stack.

use crate::config::CrawlConfig;
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::sink::DiscoverySink;
use crate::state::{FailureGovernor, VisitRegistry};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// State shared by every task spawned from one crawl invocation
///
/// Created once when the crawl starts and discarded when the top-level call
/// returns. The registry and governor are the only mutable members; both are
/// internally synchronized, so tasks hold this behind a plain `Arc`.
pub(crate) struct SharedCrawlState {
    pub config: CrawlConfig,
    pub visited: VisitRegistry,
    pub failures: FailureGovernor,
    pub sink: Arc<dyn DiscoverySink>,
    pub client: Client,
    /// The seed URL's normalized host, for domain-scope comparison
    pub seed_host: String,
}

/// One unit of crawl work: a URL and the depth it was discovered at
///
/// Immutable once constructed; a task only reads shared state and produces
/// children at `depth + 1`.
pub(crate) struct CrawlTask {
    pub url: Url,
    pub depth: u32,
    pub shared: Arc<SharedCrawlState>,
}

impl CrawlTask {
    /// The root task for a crawl, at depth 0
    pub fn root(url: Url, shared: Arc<SharedCrawlState>) -> Self {
        Self {
            url,
            depth: 0,
            shared,
        }
    }

    fn child(&self, url: Url, depth: u32) -> Self {
        Self {
            url,
            depth,
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Runs one task and its transitively spawned subtree to completion
///
/// Per task:
///
/// 1. If the failure governor is at its limit, the branch ends without a
///    fetch
/// 2. If the incremented depth meets the configured bound, the branch ends
///    without a fetch
/// 3. A transport failure ends the branch silently — it is not recorded
///    against the failure limit. A 5xx response is recorded and ends the
///    branch without scanning the body. Any other response is scanned
/// 4. Every surviving link is reported to the sink in document order, then
///    spawned as a child task; the sink fires even for links the depth bound
///    will prune
/// 5. The task completes only after all of its children complete
///
/// Boxed because the future recurses through `JoinSet::spawn`.
pub(crate) fn run_task(task: CrawlTask) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async move {
        let shared = Arc::clone(&task.shared);

        if !shared.failures.below_limit() {
            tracing::debug!("Skipping {}: failure limit reached", task.url);
            return;
        }

        let new_depth = task.depth + 1;
        if let Some(max_depth) = shared.config.max_depth {
            if new_depth >= max_depth {
                tracing::debug!(
                    "Skipping fetch of {}: depth bound {} reached",
                    task.url,
                    max_depth
                );
                return;
            }
        }

        let body = match fetch_url(&shared.client, task.url.as_str()).await {
            FetchResult::Success { status_code, body } => {
                tracing::debug!("Fetched {} ({})", task.url, status_code);
                body
            }
            FetchResult::ServerError { status_code } => {
                let (count, exceeded) = shared.failures.record_failure();
                if exceeded {
                    tracing::warn!(
                        "Failure limit reached after {} server errors; no new fetches will start",
                        count
                    );
                } else {
                    tracing::debug!(
                        "Server error {} from {} ({} of {} tolerated)",
                        status_code,
                        task.url,
                        count,
                        shared.config.fail_limit
                    );
                }
                return;
            }
            FetchResult::NetworkError { error } => {
                // Not counted against the failure limit
                tracing::debug!("Transport failure fetching {}: {}", task.url, error);
                return;
            }
        };

        let links = extract_links(
            &body,
            &task.url,
            &shared.config,
            &shared.visited,
            &shared.seed_host,
        );

        let mut children = JoinSet::new();
        for link in links {
            shared.sink.on_url(&link);
            children.spawn(run_task(task.child(link, new_depth)));
        }

        while let Some(joined) = children.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Crawl task failed to join: {}", e);
            }
        }
    })
}
