use crate::config::CrawlConfig;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Rejects degenerate values that would make the crawl a no-op:
/// a zero `fail_limit` gates off the very first fetch, and a zero
/// `max_depth` prunes the seed task before it fetches anything.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.fail_limit == 0 {
        return Err(ConfigError::Validation(
            "fail-limit must be at least 1".to_string(),
        ));
    }

    if config.max_depth == Some(0) {
        return Err(ConfigError::Validation(
            "max-depth must be at least 1 when set (omit it to disable the depth check)"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&CrawlConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_fail_limit_rejected() {
        let config = CrawlConfig {
            fail_limit: 0,
            ..CrawlConfig::default()
        };
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_max_depth_rejected() {
        let config = CrawlConfig {
            max_depth: Some(0),
            ..CrawlConfig::default()
        };
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_depth_one_is_valid() {
        let config = CrawlConfig {
            max_depth: Some(1),
            ..CrawlConfig::default()
        };
        assert!(validate(&config).is_ok());
    }
}
