//! HTTP fetcher implementation
//!
//! This module handles the single-page fetch for the crawler: building the
//! shared HTTP client and retrieving one URL's body. The result keeps
//! transport-level failures distinguishable from responses that carry an
//! error status code, because the two feed different pruning paths in the
//! engine.

use reqwest::Client;
use std::time::Duration;

/// Result of fetching one URL
#[derive(Debug)]
pub enum FetchResult {
    /// Response received and body decoded; any status outside 500..600
    /// lands here, including 4xx — the body is still scanned for links
    Success {
        /// HTTP status code
        status_code: u16,
        /// Decoded body text (charset= from Content-Type honored,
        /// UTF-8 fallback)
        body: String,
    },

    /// Response carried a server-error status (500..600); counted against
    /// the crawl-wide failure limit, body never scanned
    ServerError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Connection, timeout, or body-read failure at the transport level;
    /// terminates the branch without touching the failure governor
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by every task of a crawl
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// # Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Status 500..600 | `ServerError` (body not read) |
/// | Any other status | `Success` with decoded body |
/// | Connection refused / timeout | `NetworkError` |
/// | Body read failure | `NetworkError` |
///
/// Redirects follow the client's default policy.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status_code = response.status().as_u16();

            if (500..600).contains(&status_code) {
                return FetchResult::ServerError { status_code };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { status_code, body },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = build_http_client().unwrap();
        // Port 1 on localhost refuses connections
        let result = fetch_url(&client, "http://127.0.0.1:1/").await;
        assert!(matches!(result, FetchResult::NetworkError { .. }));
    }

    // Status-code classification is covered with wiremock in the
    // integration tests.
}
