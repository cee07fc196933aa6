//! Renderer tests
//!
//! Compose-level assertions on layout and pagination rules, plus a smoke
//! test that a real PDF file lands on disk.

use pagepress::document::{Document, Link, PageMetadata, Section, TabEntry};
use pagepress::pdf::renderer::{
    FontStyle, RunColor, MARGIN_BOTTOM_MM, MARGIN_SIDE_MM, PAGE_HEIGHT_MM,
};
use pagepress::pdf::PdfRenderer;

fn document(sections: Vec<Section>, links: Vec<Link>, tabs: Vec<TabEntry>) -> Document {
    Document {
        metadata: PageMetadata {
            title: "Example Title".to_string(),
            url: "https://x.test/".to_string(),
            description: "A page description.".to_string(),
        },
        sections,
        links,
        tabs,
    }
}

fn one_section() -> Vec<Section> {
    vec![Section {
        heading: "H".to_string(),
        body: vec!["Body.".to_string()],
    }]
}

fn one_link() -> Vec<Link> {
    vec![Link {
        display_text: "Link".to_string(),
        target_url: "https://x.test/l".to_string(),
    }]
}

#[test]
fn test_document_without_tabs_is_one_page() {
    let doc = document(one_section(), one_link(), Vec::new());
    let pages = PdfRenderer::compose(&doc);
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_tabs_get_their_own_page() {
    let tabs = vec![
        TabEntry {
            label: "Specs".to_string(),
            content: "Spec panel text.".to_string(),
        },
        TabEntry {
            label: "Reviews".to_string(),
            content: "Review panel text.".to_string(),
        },
    ];
    let doc = document(one_section(), one_link(), tabs);
    let pages = PdfRenderer::compose(&doc);

    assert_eq!(pages.len(), 2);

    // Tab page opens with its title, followed by each label and content
    let texts: Vec<&str> = pages[1].runs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts[0], "Tabbed Content");
    assert!(texts.contains(&"Specs"));
    assert!(texts.contains(&"Reviews"));
}

#[test]
fn test_title_block_layout() {
    let doc = document(Vec::new(), Vec::new(), Vec::new());
    let pages = PdfRenderer::compose(&doc);
    let runs = &pages[0].runs;

    // Title bold and centered, then URL and description regular and centered
    assert_eq!(runs[0].text, "Example Title");
    assert_eq!(runs[0].style, FontStyle::Bold);
    assert!(runs[0].x_mm > MARGIN_SIDE_MM);

    assert_eq!(runs[1].text, "https://x.test/");
    assert_eq!(runs[1].style, FontStyle::Regular);
    assert_eq!(runs[2].text, "A page description.");
}

#[test]
fn test_link_lines_are_colored_and_formatted() {
    let doc = document(Vec::new(), one_link(), Vec::new());
    let pages = PdfRenderer::compose(&doc);

    let label = pages[0]
        .runs
        .iter()
        .find(|r| r.text == "Links:")
        .expect("links label");
    assert_eq!(label.style, FontStyle::Bold);
    assert_eq!(label.color, RunColor::Body);

    let link = pages[0]
        .runs
        .iter()
        .find(|r| r.text == "Link -> https://x.test/l")
        .expect("link line");
    assert_eq!(link.color, RunColor::Link);
    assert_eq!(link.style, FontStyle::Regular);
}

#[test]
fn test_no_links_no_label() {
    let doc = document(one_section(), Vec::new(), Vec::new());
    let pages = PdfRenderer::compose(&doc);
    assert!(pages[0].runs.iter().all(|r| r.text != "Links:"));
}

#[test]
fn test_overflow_breaks_pages_and_respects_bottom_margin() {
    let sections = (0..80)
        .map(|i| Section {
            heading: format!("Section {i}"),
            body: vec![
                "A reasonably long body line that stands in for paragraph text.".to_string(),
            ],
        })
        .collect();
    let doc = document(sections, Vec::new(), Vec::new());
    let pages = PdfRenderer::compose(&doc);

    assert!(pages.len() > 2);
    for page in &pages {
        assert!(!page.runs.is_empty());
        for run in &page.runs {
            assert!(run.y_mm + run.line_mm <= PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM + 0.001);
        }
    }
}

#[test]
fn test_long_body_wraps_to_multiple_runs() {
    let body = "word ".repeat(120).trim().to_string();
    let doc = document(
        vec![Section {
            heading: "H".to_string(),
            body: vec![body],
        }],
        Vec::new(),
        Vec::new(),
    );
    let pages = PdfRenderer::compose(&doc);
    let body_runs = pages[0]
        .runs
        .iter()
        .filter(|r| r.text.starts_with("word"))
        .count();
    assert!(body_runs > 1);
}

#[test]
fn test_extracted_page_without_tabs_renders_one_page() {
    let html = r#"<title>T</title><meta name="description" content="D">
        <h1>H</h1><p>Body.</p><a href="/l">Link</a>"#;
    let doc = pagepress::pipeline::extract_document(html, "https://x.test/", Vec::new());
    let pages = PdfRenderer::compose(&doc);
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_render_to_file_writes_a_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let doc = document(
        one_section(),
        one_link(),
        vec![TabEntry {
            label: "Tab".to_string(),
            content: "Panel".to_string(),
        }],
    );
    PdfRenderer::render_to_file(&doc, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn test_render_to_unwritable_path_is_fatal() {
    let doc = document(Vec::new(), Vec::new(), Vec::new());
    let missing_dir = std::path::Path::new("/nonexistent-dir-for-test/out.pdf");
    assert!(PdfRenderer::render_to_file(&doc, missing_dir).is_err());
}
