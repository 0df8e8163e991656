//! Linkrake: a bounded, concurrent link-discovery crawler
//!
//! Given a seed URL, linkrake fetches the page, extracts outbound hyperlinks,
//! and recursively repeats the process on the discovered links — bounded by a
//! depth limit, a same-domain restriction, a duplicate-visit filter, and a
//! shared failure-tolerance threshold. Every link that survives filtering is
//! reported to a [`sink::DiscoverySink`] as it is found.

pub mod config;
pub mod crawler;
pub mod sink;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for linkrake operations
#[derive(Debug, Error)]
pub enum RakeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for linkrake operations
pub type Result<T> = std::result::Result<T, RakeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::crawl;
pub use sink::{CollectingSink, DiscoverySink};
pub use url::normalize_url;
