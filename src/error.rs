//! Error types for pagepress
//!
//! This module provides the error type hierarchy using `thiserror`,
//! following the run-level taxonomy: fetch and render failures abort the
//! run, discovery failures are absorbed where they occur.

use thiserror::Error;

/// The main error type for pagepress operations
#[derive(Error, Debug)]
pub enum Error {
    /// Page acquisition errors (network, HTTP status, browser)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// PDF production errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Page acquisition errors
///
/// Covers both the static HTTP path and the headless-browser path. All
/// variants are fatal to the run; there is no retry policy.
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL failed validation before any request was made
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The acquire phase exceeded its deadline
    #[error("Fetch timed out after {0}ms")]
    Timeout(u64),

    /// Server answered with a non-success status
    #[error("HTTP error {status} for {url}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to launch the headless browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create a new page
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    /// Navigation completed but the page failed to load
    #[error("Page load failed: {0}")]
    LoadFailed(String),

    /// CDP-level failure while talking to the browser
    #[error("CDP error: {0}")]
    Cdp(String),
}

/// Tab discovery errors
///
/// Never routed into [`Error`]: discovery failures are caught at the
/// discovery boundary and degrade to zero tabs. The variants exist so the
/// unavailable case stays inspectable.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No live, scriptable session is available
    #[error("No live session available: {0}")]
    SessionUnavailable(String),

    /// A selector lookup failed on the live page
    #[error("Selector failed: {0}")]
    SelectorFailed(String),

    /// JavaScript evaluation against the live page failed
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),
}

/// PDF production errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Registering a built-in font with the document failed
    #[error("Font registration failed: {0}")]
    FontUnavailable(String),

    /// The PDF library rejected the layout commands
    #[error("PDF encoding failed: {0}")]
    Pdf(String),

    /// Writing the output file failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pagepress operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }
}

/// Convert chromiumoxide errors into the fatal fetch class
impl From<chromiumoxide::error::CdpError> for FetchError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        FetchError::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Fetch(FetchError::LaunchFailed("no chrome".to_string()));
        assert!(err.to_string().contains("Failed to launch browser"));
        assert!(err.to_string().contains("no chrome"));
    }

    #[test]
    fn test_fetch_http_error() {
        let err = FetchError::Http {
            status: 404,
            url: "https://example.com/missing".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn test_discovery_error() {
        let err = DiscoveryError::SessionUnavailable("static fetch".to_string());
        assert!(err.to_string().contains("No live session"));
    }

    #[test]
    fn test_render_error() {
        let err = RenderError::Pdf("bad stream".to_string());
        assert!(err.to_string().contains("PDF encoding failed"));
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
