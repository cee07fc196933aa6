//! PagePress - Single-Page Web Capture to Paginated PDF
//!
//! This crate fetches one web page (statically, or JS-rendered through a
//! headless Chromium session), extracts a structured representation of its
//! visible content, and renders that structure into a paginated PDF report.
//!
//! # Architecture
//!
//! ```text
//! URL ──▶ Fetch (reqwest / ChromiumOxide CDP)
//!              │
//!              ▼
//!        Parsed tree ──▶ {Metadata, Sections, Links}    Live session ──▶ Tabs
//!              │                        │                        │
//!              └────────────────────────┴────────┬───────────────┘
//!                                                ▼
//!                                            Document
//!                                                │
//!                                                ▼
//!                                      PdfRenderer (printpdf)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagepress::pipeline::{self, PipelineOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = PipelineOptions::new("https://example.com");
//!     pipeline::run(&options).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod document;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod pdf;
pub mod pipeline;

// Re-exports for convenience
pub use browser::{BrowserController, TabDiscoverer, TabDiscovery};
pub use document::{Document, Link, PageMetadata, Section, TabEntry};
pub use error::{Error, Result};
pub use extraction::{LinkExtractor, MetadataExtractor, SectionExtractor, TextSanitizer};
pub use pdf::PdfRenderer;
pub use pipeline::{FetchMode, PipelineOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
