use crate::url::normalize_url;
use crate::UrlError;
use url::Url;

/// Extracts the normalized host of the seed URL
///
/// The crawl's shared state stores this once; every domain-scope comparison
/// during the crawl is made against it.
///
/// # Arguments
///
/// * `seed` - The parsed seed URL
///
/// # Returns
///
/// * `Ok(String)` - The seed's host, normalized (e.g. `www.` stripped)
/// * `Err(UrlError::MissingHost)` - The seed URL has no host component
pub fn seed_host(seed: &Url) -> Result<String, UrlError> {
    seed.host_str()
        .map(normalize_url)
        .ok_or(UrlError::MissingHost)
}

/// Checks whether a candidate URL's normalized host matches the seed's
///
/// A candidate without a host component never matches.
pub fn same_host(candidate: &Url, seed_host: &str) -> bool {
    candidate
        .host_str()
        .map(|h| normalize_url(h) == seed_host)
        .unwrap_or(false)
}
