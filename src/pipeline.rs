//! End-to-end scrape pipeline
//!
//! One pipeline, parameterized by how the page is acquired: a headless
//! browser session (JS rendered, tab discovery available) or a plain HTTP
//! GET (no live session, so tab discovery reports unavailable). Everything
//! downstream of acquisition is identical: parse, extract, assemble the
//! [`Document`], render the PDF.

use crate::browser::{BrowserConfig, BrowserController, TabDiscoverer, TabDiscovery};
use crate::document::{Document, TabEntry};
use crate::error::{DiscoveryError, FetchError, Result};
use crate::extraction::{LinkExtractor, MetadataExtractor, SectionExtractor};
use crate::fetch::StaticFetcher;
use crate::pdf::PdfRenderer;
use scraper::Html;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};

/// How the page markup is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Headless Chromium: JS rendered, live session for tab discovery
    Browser,
    /// Plain HTTP GET: no JS, no live session
    Static,
}

/// Options for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Page URL to scrape
    pub url: String,
    /// Output PDF path
    pub output: PathBuf,
    /// Acquisition mode
    pub mode: FetchMode,
    /// Deadline for the whole acquire phase (navigate, settle, snapshot,
    /// tab discovery), in seconds
    pub acquire_timeout_secs: u64,
    /// Path to Chrome/Chromium executable (browser mode)
    pub chrome_path: Option<String>,
    /// Run the browser headless (browser mode)
    pub headless: bool,
}

impl PipelineOptions {
    /// Browser-mode options with the default output path
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            output: PathBuf::from("output.pdf"),
            mode: FetchMode::Browser,
            acquire_timeout_secs: 120,
            chrome_path: None,
            headless: true,
        }
    }
}

/// Run the full pipeline: acquire, extract, render
#[instrument(skip(options), fields(url = %options.url))]
pub async fn run(options: &PipelineOptions) -> Result<()> {
    let deadline = Duration::from_secs(options.acquire_timeout_secs);
    let (html, discovery) = tokio::time::timeout(deadline, acquire(options))
        .await
        .map_err(|_| FetchError::Timeout(deadline.as_millis() as u64))??;

    let document = extract_document(&html, &options.url, discovery.into_entries());
    info!(
        "Extracted {} sections, {} links, {} tabs",
        document.sections.len(),
        document.links.len(),
        document.tabs.len()
    );

    PdfRenderer::render_to_file(&document, &options.output)?;
    Ok(())
}

/// Acquire the page markup and, in browser mode, the tab entries
async fn acquire(options: &PipelineOptions) -> Result<(String, TabDiscovery)> {
    match options.mode {
        FetchMode::Browser => {
            let mut builder = BrowserConfig::builder().headless(options.headless);
            if let Some(ref path) = options.chrome_path {
                builder = builder.chrome_path(path);
            }
            let controller = BrowserController::with_config(builder.build()).await?;
            let result = drive(&controller, &options.url).await;
            if let Err(e) = controller.close().await {
                info!("Browser close failed after run: {e}");
            }
            result
        }
        FetchMode::Static => {
            let fetcher = StaticFetcher::new()?;
            let html = fetcher.fetch(&options.url).await?;
            let discovery = TabDiscovery::Unavailable(DiscoveryError::SessionUnavailable(
                "static fetch has no live session".to_string(),
            ));
            Ok((html, discovery))
        }
    }
}

/// Navigate, snapshot, then discover tabs against the live page
///
/// The snapshot precedes tab activation so the static extractors see the
/// page's initial state, not whichever panel was activated last.
async fn drive(controller: &BrowserController, url: &str) -> Result<(String, TabDiscovery)> {
    let page = controller.navigate(url).await?;
    let html = page.content().await?;
    let discovery = TabDiscoverer::discover(&page).await;
    Ok((html, discovery))
}

/// Parse the markup and assemble the render input
///
/// Parsing is best-effort and never fails; malformed markup yields whatever
/// tree the parser can build. The extractors each read the same immutable
/// tree and own their returned fragment.
pub fn extract_document(html: &str, url: &str, tabs: Vec<TabEntry>) -> Document {
    let tree = Html::parse_document(html);
    Document {
        metadata: MetadataExtractor::extract(&tree, url),
        sections: SectionExtractor::extract(&tree),
        links: LinkExtractor::extract(&tree, url),
        tabs,
    }
}
