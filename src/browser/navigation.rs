//! Page navigation functionality
//!
//! Navigation is a single bounded attempt: validate the URL, drive the page
//! there, wait for the load event, then hold a fixed settle delay so
//! client-side rendering can finish before the DOM is snapshotted. There is
//! deliberately no retry loop.

use crate::browser::PageHandle;
use crate::error::{FetchError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Fixed post-load settle delay before the page is considered stable
pub const SETTLE_DELAY_MS: u64 = 3000;

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Settle delay after load in milliseconds (default: [`SETTLE_DELAY_MS`])
    pub settle_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            settle_ms: SETTLE_DELAY_MS,
        }
    }
}

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Navigation duration in milliseconds, settle delay included
    pub duration_ms: u64,
}

/// URL validation utilities
pub struct UrlValidator;

impl UrlValidator {
    /// Validate a URL for navigation
    pub fn validate(url: &str) -> std::result::Result<(), String> {
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ));
        }

        if url.len() > 2048 {
            return Err("URL exceeds maximum length of 2048 characters".to_string());
        }

        Ok(())
    }
}

/// Page navigator
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL, wait for load, then hold the settle delay
    #[instrument(skip(page))]
    pub async fn goto(
        page: &PageHandle,
        url: &str,
        options: Option<NavigationOptions>,
    ) -> Result<NavigationResult> {
        let opts = options.unwrap_or_default();
        let start = std::time::Instant::now();

        UrlValidator::validate(url).map_err(FetchError::InvalidUrl)?;

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(opts.timeout_ms);
        let nav_future = page.page.goto(url);
        tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| FetchError::Timeout(opts.timeout_ms))?
            .map_err(|e| FetchError::LoadFailed(e.to_string()))?;

        Self::wait_for_load(page, opts.timeout_ms).await?;

        // Fixed settle so client-side rendering completes before snapshot
        tokio::time::sleep(Duration::from_millis(opts.settle_ms)).await;

        let final_url = page
            .page
            .url()
            .await
            .map_err(|e| FetchError::Cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        page.set_url(final_url.clone()).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            duration_ms,
        })
    }

    /// Wait for the document load event
    async fn wait_for_load(page: &PageHandle, timeout_ms: u64) -> Result<()> {
        let script = r#"
            new Promise(resolve => {
                if (document.readyState === 'complete') {
                    resolve(true);
                } else {
                    window.addEventListener('load', () => resolve(true));
                }
            })
        "#;

        let timeout = Duration::from_millis(timeout_ms);
        tokio::time::timeout(timeout, page.page.evaluate(script))
            .await
            .map_err(|_| FetchError::Timeout(timeout_ms))?
            .map_err(|e| FetchError::Cdp(e.to_string()))?;

        Ok(())
    }
}
