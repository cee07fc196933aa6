//! Link extraction
//!
//! Collects anchors with a usable destination, filters out script/contact
//! pseudo-links, and resolves root-relative destinations against the page
//! base URL. Destinations that are neither absolute nor root-relative pass
//! through unchanged; full RFC 3986 resolution is deliberately not applied.

use crate::document::Link;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Destination prefixes that never produce a link entry
const REJECTED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:"];

/// Link extraction functionality
pub struct LinkExtractor;

impl LinkExtractor {
    /// Extract filtered, normalized links in document order
    pub fn extract(html: &Html, base_url: &str) -> Vec<Link> {
        let anchor_sel = Selector::parse("a[href]").unwrap();

        let links: Vec<Link> = html
            .select(&anchor_sel)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                if !Self::is_valid(href) {
                    return None;
                }

                let text = anchor.text().collect::<String>().trim().to_string();
                let display_text = if text.is_empty() {
                    href.to_string()
                } else {
                    text
                };

                Some(Link {
                    display_text,
                    target_url: Self::normalize(href, base_url),
                })
            })
            .collect();

        debug!("Extracted {} links", links.len());
        links
    }

    /// Whether a destination should be kept
    fn is_valid(href: &str) -> bool {
        !href.is_empty()
            && !REJECTED_SCHEMES
                .iter()
                .any(|scheme| href.starts_with(scheme))
            && href.trim() != "#"
    }

    /// Resolve root-relative destinations against the base URL
    ///
    /// Only destinations starting with `/` are resolved; everything else
    /// (absolute, protocol-relative, bare relative) passes through as-is.
    fn normalize(href: &str, base_url: &str) -> String {
        if !href.starts_with('/') {
            return href.to_string();
        }
        match Url::parse(base_url).and_then(|base| base.join(href)) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => href.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<Link> {
        LinkExtractor::extract(&Html::parse_document(html), "https://example.com/x")
    }

    #[test]
    fn test_rejects_script_and_contact_schemes() {
        let links = extract(
            r##"<body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:a@b.c">mail</a>
            <a href="tel:+123">call</a>
            <a href="#">top</a>
            <a href="https://kept.example">kept</a>
            </body>"##,
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target_url, "https://kept.example");
    }

    #[test]
    fn test_root_relative_resolved_against_base() {
        let links = extract(r#"<a href="/about">About</a>"#);
        assert_eq!(links[0].target_url, "https://example.com/about");
    }

    #[test]
    fn test_absolute_passes_through() {
        let links = extract(r#"<a href="https://other.com">Other</a>"#);
        assert_eq!(links[0].target_url, "https://other.com");
    }

    #[test]
    fn test_protocol_relative_not_resolved() {
        let links = extract(r#"<a href="//cdn.example/x.js">cdn</a>"#);
        assert_eq!(links[0].target_url, "//cdn.example/x.js");
    }

    #[test]
    fn test_bare_relative_not_resolved() {
        let links = extract(r#"<a href="about.html">About</a>"#);
        assert_eq!(links[0].target_url, "about.html");
    }

    #[test]
    fn test_display_text_falls_back_to_destination() {
        let links = extract(r#"<a href="https://other.com"></a>"#);
        assert_eq!(links[0].display_text, "https://other.com");
    }

    #[test]
    fn test_display_text_trimmed() {
        let links = extract(r#"<a href="https://other.com">  Other Site  </a>"#);
        assert_eq!(links[0].display_text, "Other Site");
    }

    #[test]
    fn test_empty_href_skipped() {
        let links = extract(r#"<a href="">nothing</a>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_with_surrounding_space_rejected() {
        let links = extract(r##"<a href=" # ">top</a>"##);
        assert!(links.is_empty());
    }
}
