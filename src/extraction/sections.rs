//! Heading section extraction
//!
//! Associates loose page text with the heading that precedes it. The walk
//! covers the heading's *following siblings* only and stops at the next
//! heading sibling; content nested inside later wrapper elements is not
//! captured. That keeps the association rule simple and predictable at the
//! cost of missing wrapped content, which is an accepted limitation.

use crate::document::Section;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Heading section extraction functionality
pub struct SectionExtractor;

impl SectionExtractor {
    /// Extract one section per `h1`-`h6`, in document order
    pub fn extract(html: &Html) -> Vec<Section> {
        let heading_sel = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();

        let sections: Vec<Section> = html
            .select(&heading_sel)
            .map(|heading| Section {
                heading: element_text(heading),
                body: Self::body_lines(heading),
            })
            .collect();

        debug!("Extracted {} sections", sections.len());
        sections
    }

    /// Collect body lines from the heading's following siblings
    ///
    /// Terminates at the next heading sibling (excluded) or when siblings
    /// are exhausted. `<p>` contributes one line, `<ul>`/`<ol>` one line per
    /// item; every other sibling is skipped.
    fn body_lines(heading: ElementRef) -> Vec<String> {
        let item_sel = Selector::parse("li").unwrap();

        let mut lines = Vec::new();
        for sibling in heading.next_siblings() {
            let Some(el) = ElementRef::wrap(sibling) else {
                continue; // text and comment nodes
            };
            if is_heading(&el) {
                break;
            }
            match el.value().name() {
                "p" => lines.push(element_text(el)),
                "ul" | "ol" => {
                    for item in el.select(&item_sel) {
                        lines.push(format!("- {}", element_text(item)));
                    }
                }
                _ => {}
            }
        }
        lines
    }
}

/// Termination predicate for the sibling walk
fn is_heading(el: &ElementRef) -> bool {
    matches!(
        el.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<Section> {
        SectionExtractor::extract(&Html::parse_document(html))
    }

    #[test]
    fn test_one_section_per_heading_in_order() {
        let sections = extract(
            "<body><h1>First</h1><p>a</p><h2>Second</h2><p>b</p><h3>Third</h3></body>",
        );
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading, "First");
        assert_eq!(sections[1].heading, "Second");
        assert_eq!(sections[2].heading, "Third");
    }

    #[test]
    fn test_paragraphs_become_body_lines() {
        let sections = extract("<body><h1>H</h1><p> one </p><p>two</p></body>");
        assert_eq!(sections[0].body, vec!["one", "two"]);
    }

    #[test]
    fn test_list_items_prefixed() {
        let sections = extract("<body><h1>H</h1><ul><li>a</li><li>b</li></ul></body>");
        assert_eq!(sections[0].body, vec!["- a", "- b"]);
    }

    #[test]
    fn test_ordered_list_items_prefixed() {
        let sections = extract("<body><h1>H</h1><ol><li>x</li></ol></body>");
        assert_eq!(sections[0].body, vec!["- x"]);
    }

    #[test]
    fn test_scan_stops_at_next_heading() {
        let sections = extract("<body><h1>A</h1><p>mine</p><h2>B</h2><p>theirs</p></body>");
        assert_eq!(sections[0].body, vec!["mine"]);
        assert_eq!(sections[1].body, vec!["theirs"]);
    }

    #[test]
    fn test_adjacent_headings_give_empty_body() {
        let sections = extract("<body><h1>A</h1><h2>B</h2><p>b body</p></body>");
        assert_eq!(sections.len(), 2);
        assert!(sections[0].body.is_empty());
        assert_eq!(sections[1].body, vec!["b body"]);
    }

    #[test]
    fn test_wrapped_content_not_captured() {
        // The <p> is a descendant of the <div> sibling, not a sibling itself
        let sections = extract("<body><h1>A</h1><div><p>wrapped</p></div></body>");
        assert!(sections[0].body.is_empty());
    }

    #[test]
    fn test_non_content_siblings_skipped() {
        let sections =
            extract("<body><h1>A</h1><table><tr><td>cell</td></tr></table><p>kept</p></body>");
        assert_eq!(sections[0].body, vec!["kept"]);
    }

    #[test]
    fn test_no_headings_yields_no_sections() {
        assert!(extract("<body><p>just text</p></body>").is_empty());
    }
}
