//! Page content data model
//!
//! The structured representation of one scraped page: metadata, heading
//! sections, links, and tabbed-panel content. Each extractor produces its
//! own fragment; the pipeline assembles the [`Document`] once and hands it
//! read-only to the renderer.

use serde::{Deserialize, Serialize};

/// Default title when the page has no `<title>` element
pub const NO_TITLE: &str = "No Title";

/// Default description when the page has no description meta tag
pub const NO_DESCRIPTION: &str = "No Description";

/// Page-level metadata, created once per page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title, or [`NO_TITLE`]
    pub title: String,
    /// The URL the page was fetched from
    pub url: String,
    /// Meta description, or [`NO_DESCRIPTION`]
    pub description: String,
}

/// One heading plus the body lines that follow it
///
/// Body lines accumulate from the heading's following siblings until the
/// next heading or the end of the parent; a heading directly followed by
/// another heading has an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Trimmed heading text
    pub heading: String,
    /// Ordered body lines (paragraphs and `"- "`-prefixed list items)
    pub body: Vec<String>,
}

/// A filtered, normalized hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible text, falling back to the raw destination when empty
    pub display_text: String,
    /// The original destination, or a root-relative destination resolved
    /// against the page base URL
    pub target_url: String,
}

/// One discovered tab and the panel text its activation revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    /// Trimmed tab control label
    pub label: String,
    /// Trimmed panel text, always non-empty
    pub content: String,
}

/// The assembled render input
///
/// Built exactly once per run and consumed exactly once by the renderer;
/// no mutation after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page metadata block
    pub metadata: PageMetadata,
    /// Heading sections in document order
    pub sections: Vec<Section>,
    /// Filtered links in document order
    pub links: Vec<Link>,
    /// Tab entries in DOM tab order
    pub tabs: Vec<TabEntry>,
}

impl Document {
    /// Whether the tabbed-content page will be emitted
    pub fn has_tabs(&self) -> bool {
        !self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_stable() {
        assert_eq!(NO_TITLE, "No Title");
        assert_eq!(NO_DESCRIPTION, "No Description");
    }

    #[test]
    fn test_document_has_tabs() {
        let mut doc = Document {
            metadata: PageMetadata {
                title: "T".to_string(),
                url: "https://example.com".to_string(),
                description: "D".to_string(),
            },
            sections: Vec::new(),
            links: Vec::new(),
            tabs: Vec::new(),
        };
        assert!(!doc.has_tabs());

        doc.tabs.push(TabEntry {
            label: "Overview".to_string(),
            content: "Panel text".to_string(),
        });
        assert!(doc.has_tabs());
    }

    #[test]
    fn test_document_serialization_round_trip() {
        let doc = Document {
            metadata: PageMetadata {
                title: "T".to_string(),
                url: "https://x.test/".to_string(),
                description: "D".to_string(),
            },
            sections: vec![Section {
                heading: "H".to_string(),
                body: vec!["Body.".to_string()],
            }],
            links: vec![Link {
                display_text: "Link".to_string(),
                target_url: "https://x.test/l".to_string(),
            }],
            tabs: Vec::new(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
