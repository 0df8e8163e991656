/// Normalizes a URL string for comparison and deduplication
///
/// # Normalization Steps
///
/// 1. Remove every literal `www.` substring
/// 2. Remove embedded spaces and double-quote characters
/// 3. Strip one trailing `/` if present
///
/// The result is used as the dedup key and, applied to hostnames, as the
/// basis for domain-scope comparison. Idempotent:
/// `normalize_url(&normalize_url(x)) == normalize_url(x)`.
///
/// # Examples
///
/// ```
/// use linkrake::url::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://www.Example.com/path/"),
///     "https://Example.com/path"
/// );
/// ```
pub fn normalize_url(url: &str) -> String {
    let mut cleaned = url.replace(' ', "").replace('"', "");

    // Removal can splice a new occurrence together, so run to fixpoint
    while cleaned.contains("www.") {
        cleaned = cleaned.replace("www.", "");
    }

    match cleaned.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => cleaned,
    }
}
