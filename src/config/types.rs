use serde::Deserialize;

/// Configuration for a single crawl invocation
///
/// Immutable once the crawl starts; shared by reference (inside the crawl's
/// shared state) across every concurrently running task.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Maximum crawl depth from the seed URL
    ///
    /// `None` disables the depth check entirely. When set, a task whose
    /// incremented depth would meet or exceed this value does not fetch.
    #[serde(rename = "max-depth", default)]
    pub max_depth: Option<u32>,

    /// Number of server-error (5xx) responses tolerated across the whole
    /// crawl before new fetches stop being initiated
    #[serde(rename = "fail-limit", default = "default_fail_limit")]
    pub fail_limit: u32,

    /// When true, only links whose host matches the seed's host (after
    /// normalization) are reported and crawled
    #[serde(rename = "domain-only", default = "default_true")]
    pub domain_only: bool,

    /// When true, a concurrency-safe registry deduplicates discovered URLs;
    /// when false, every syntactically valid link is kept, repeats included
    #[serde(rename = "check-visit", default = "default_true")]
    pub check_visit: bool,
}

fn default_fail_limit() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            fail_limit: default_fail_limit(),
            domain_only: true,
            check_visit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.fail_limit, 5);
        assert!(config.domain_only);
        assert!(config.check_visit);
    }

    #[test]
    fn test_deserialize_empty_table_uses_defaults() {
        let config: CrawlConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.fail_limit, 5);
        assert!(config.domain_only);
        assert!(config.check_visit);
    }

    #[test]
    fn test_deserialize_kebab_case_keys() {
        let config: CrawlConfig = toml::from_str(
            r#"
max-depth = 3
fail-limit = 10
domain-only = false
check-visit = false
"#,
        )
        .unwrap();

        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.fail_limit, 10);
        assert!(!config.domain_only);
        assert!(!config.check_visit);
    }
}
