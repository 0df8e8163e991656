//! Crawler module: fetching, link extraction, and the traversal engine
//!
//! [`crawl`] is the entry point: it resolves the seed, builds the shared
//! state, and runs the recursive task tree to completion.

mod engine;
mod extractor;
mod fetcher;

pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_url, FetchResult};

use crate::config::CrawlConfig;
use crate::sink::DiscoverySink;
use crate::state::{FailureGovernor, VisitRegistry};
use crate::url::seed_host;
use crate::Result;
use engine::{run_task, CrawlTask, SharedCrawlState};
use std::sync::Arc;
use url::Url;

/// Crawls from a seed URL, reporting every discovered link to the sink
///
/// Completes when the root task and its entire transitively forked subtree
/// have completed; all output arrives through `sink` during execution. No
/// error encountered mid-crawl aborts the invocation — branches terminate
/// individually and the call returns normally.
///
/// # Arguments
///
/// * `seed` - The starting URL
/// * `sink` - Callback invoked once per URL surviving dedup and scope
///   filtering; must tolerate concurrent invocation
/// * `config` - Depth, failure, scope, and dedup settings
///
/// # Errors
///
/// Fails up front if the seed cannot be parsed, has no host, or the HTTP
/// client cannot be built.
///
/// # Example
///
/// ```no_run
/// use linkrake::{crawl, CollectingSink, CrawlConfig};
/// use std::sync::Arc;
///
/// # async fn example() -> linkrake::Result<()> {
/// let sink = Arc::new(CollectingSink::new());
/// crawl("https://example.com/", sink.clone(), CrawlConfig::default()).await?;
/// for url in sink.urls() {
///     println!("{}", url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed: &str, sink: Arc<dyn DiscoverySink>, config: CrawlConfig) -> Result<()> {
    let seed_url = Url::parse(seed)?;
    let host = seed_host(&seed_url)?;

    let client = build_http_client()?;
    let shared = Arc::new(SharedCrawlState {
        visited: VisitRegistry::new(),
        failures: FailureGovernor::new(config.fail_limit),
        sink,
        client,
        seed_host: host,
        config,
    });

    tracing::info!("Starting crawl from {}", seed_url);
    let start = std::time::Instant::now();

    run_task(CrawlTask::root(seed_url, Arc::clone(&shared))).await;

    tracing::info!(
        "Crawl completed in {:?}: {} distinct URLs registered, {} server errors",
        start.elapsed(),
        shared.visited.len(),
        shared.failures.count()
    );

    Ok(())
}
