//! Linkrake main entry point
//!
//! Command-line interface for the linkrake crawler: crawls from a seed URL
//! and prints every discovered link to stdout as it is found.

use clap::Parser;
use linkrake::config::{load_config, validate};
use linkrake::{crawl, CrawlConfig, DiscoverySink};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Linkrake: a bounded, concurrent link-discovery crawler
///
/// Fetches the seed page, extracts outbound links, and recursively follows
/// them within the configured depth, domain, and failure bounds. Each
/// discovered URL is printed once as it is found.
#[derive(Parser, Debug)]
#[command(name = "linkrake")]
#[command(version)]
#[command(about = "Bounded, concurrent link-discovery crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Path to a TOML configuration file (flags below override its values)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum crawl depth (omit to crawl without a depth bound)
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<u32>,

    /// Number of 5xx responses tolerated before new fetches stop
    #[arg(long, value_name = "N")]
    fail_limit: Option<u32>,

    /// Follow links to any host, not just the seed's domain
    #[arg(long)]
    all_domains: bool,

    /// Report and crawl every link occurrence, duplicates included
    #[arg(long)]
    no_dedup: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };

    if let Some(depth) = cli.max_depth {
        config.max_depth = Some(depth);
    }
    if let Some(limit) = cli.fail_limit {
        config.fail_limit = limit;
    }
    if cli.all_domains {
        config.domain_only = false;
    }
    if cli.no_dedup {
        config.check_visit = false;
    }
    validate(&config)?;

    let sink: Arc<dyn DiscoverySink> = Arc::new(|url: &Url| println!("{}", url));

    crawl(&cli.seed, sink, config).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrake=info,warn"),
            1 => EnvFilter::new("linkrake=debug,info"),
            2 => EnvFilter::new("linkrake=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
