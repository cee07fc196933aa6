//! Static page fetch
//!
//! Plain HTTP GET for pages that do not need client-side rendering. No tab
//! discovery is possible on this path since there is no live session.

use crate::error::{FetchError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Desktop browser user agent for servers that reject unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout for the static path
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Static HTTP fetcher
pub struct StaticFetcher {
    client: reqwest::Client,
}

impl StaticFetcher {
    /// Build a fetcher with the desktop user agent and request timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch the raw markup of a page
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching page statically");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }

    fn classify(err: reqwest::Error, url: &str) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(REQUEST_TIMEOUT.as_millis() as u64)
        } else if err.is_builder() {
            FetchError::InvalidUrl(url.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds() {
        assert!(StaticFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_unroutable_host_is_network_error() {
        let fetcher = StaticFetcher::new().unwrap();
        let err = fetcher
            .fetch("http://nonexistent.invalid/")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Fetch(
                FetchError::Network(_) | FetchError::Timeout(_) | FetchError::InvalidUrl(_)
            )
        ));
    }
}
