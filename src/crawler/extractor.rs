//! Link extraction from fetched page bodies
//!
//! Extraction is a tolerant lexical scan, not a full HTML parse: a regex
//! matches anchor tags carrying an `href` whose value starts with `http://`,
//! `https://`, or `/`, regardless of surrounding attributes or malformed
//! markup elsewhere in the document. Matched hrefs are resolved against the
//! page's URL, filtered through the visit registry and domain scope, and
//! returned in document order.

use crate::config::CrawlConfig;
use crate::state::VisitRegistry;
use crate::url::{normalize_url, same_host};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Anchor tags with an absolute or root-relative href, case-insensitive,
/// tolerating attributes before `href`
static HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s+(?:[^>]*?\s+)?href="((?:http://|https://|/)[^"]*)""#)
        .expect("hardcoded regex pattern is valid")
});

/// Extracts the surviving candidate URLs from one page's body
///
/// For each matched href, in document order:
///
/// 1. The raw href text is normalized (`www.`, spaces, quotes, trailing
///    slash stripped), then resolved against `base`
/// 2. A candidate that fails to parse is dropped with a diagnostic
/// 3. With `check_visit` on, the normalized candidate must win the atomic
///    test-and-insert on the registry; losers are dropped silently. The
///    registry claim happens before the domain check, so out-of-scope URLs
///    still occupy their slot
/// 4. With `domain_only` on, the candidate's normalized host must equal the
///    seed's normalized host
///
/// # Arguments
///
/// * `body` - Decoded page body text
/// * `base` - The fetched page's URL, used to resolve relative hrefs
/// * `config` - The crawl configuration
/// * `visited` - The crawl-wide visit registry
/// * `seed_host` - The seed URL's normalized host
pub fn extract_links(
    body: &str,
    base: &Url,
    config: &CrawlConfig,
    visited: &VisitRegistry,
    seed_host: &str,
) -> Vec<Url> {
    let mut links = Vec::new();

    for capture in HREF_PATTERN.captures_iter(body) {
        let raw_href = &capture[1];
        let resolved = resolve_href(&normalize_url(raw_href), base);

        let candidate = match Url::parse(&resolved) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Dropping malformed link {:?} on {}: {}", raw_href, base, e);
                continue;
            }
        };

        if config.check_visit && !visited.try_visit(&normalize_url(candidate.as_str())) {
            continue;
        }

        if config.domain_only && !same_host(&candidate, seed_host) {
            continue;
        }

        links.push(candidate);
    }

    links
}

/// Resolves a (normalized) href against the page it appeared on
///
/// Protocol-relative hrefs (`//host/...`) take the base's scheme;
/// root-relative hrefs (`/...`) take the base's scheme, host, and port when
/// the port is non-default. Anything else is already absolute.
fn resolve_href(href: &str, base: &Url) -> String {
    if href.starts_with("//") {
        format!("{}:{}", base.scheme(), href)
    } else if href.starts_with('/') {
        let port = base.port().map(|p| format!(":{}", p)).unwrap_or_default();
        format!(
            "{}://{}{}{}",
            base.scheme(),
            base.host_str().unwrap_or_default(),
            port,
            href
        )
    } else {
        href.to_string()
    }
}
