//! Page metadata extraction
//!
//! Pulls the page title and meta description from the parsed tree. Absence
//! of either is normal and yields the documented defaults, never an error.

use crate::document::{PageMetadata, NO_DESCRIPTION, NO_TITLE};
use scraper::{Html, Selector};
use tracing::debug;

/// Metadata extraction functionality
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract title and description from the parsed page
    pub fn extract(html: &Html, url: &str) -> PageMetadata {
        let title_sel = Selector::parse("title").unwrap();
        let desc_sel = Selector::parse(r#"meta[name="description"]"#).unwrap();

        let title = html
            .select(&title_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let description = html
            .select(&desc_sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(String::from)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        debug!(%title, %description, "Extracted metadata");

        PageMetadata {
            title,
            url: url.to_string(),
            description,
        }
    }
}
