//! PDF layout and rendering
//!
//! Two stages: [`PdfRenderer::compose`] turns a [`Document`] into pages of
//! positioned text runs (pure, unit-testable layout), and
//! [`PdfRenderer::render_to_file`] emits those runs through `printpdf` with
//! the built-in Helvetica faces. Every string is sanitized at compose time,
//! so measurement and the PDF layer only ever see Latin-1 text.

use crate::document::Document;
use crate::error::RenderError;
use crate::extraction::TextSanitizer;
use crate::pdf::text::{text_width_mm, wrap};
use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Rgb};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info, instrument};

/// A4 portrait page width
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 portrait page height
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left/right page margin
pub const MARGIN_SIDE_MM: f32 = 10.0;
/// Top page margin
pub const MARGIN_TOP_MM: f32 = 10.0;
/// Bottom margin reserved on every page; crossing it forces a page break
pub const MARGIN_BOTTOM_MM: f32 = 15.0;
/// Usable line width between the side margins
pub const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_SIDE_MM;

const TITLE_SIZE_PT: f32 = 16.0;
const TITLE_LINE_MM: f32 = 10.0;
const HEADING_SIZE_PT: f32 = 14.0;
const HEADING_LINE_MM: f32 = 9.0;
const BODY_SIZE_PT: f32 = 12.0;
const BODY_LINE_MM: f32 = 8.0;

/// Baseline position within a line box, measured from its top
const BASELINE_RATIO: f32 = 0.75;

/// Font face of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
}

/// Fill color of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunColor {
    /// Black body text
    Body,
    /// Blue link text
    Link,
}

impl RunColor {
    fn fill(self) -> Color {
        match self {
            RunColor::Body => Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
            RunColor::Link => Color::Rgb(Rgb::new(0.0, 0.0, 1.0, None)),
        }
    }
}

/// One positioned line of text
#[derive(Debug, Clone)]
pub struct TextRun {
    /// Sanitized line text
    pub text: String,
    /// Left edge, mm from the left page edge
    pub x_mm: f32,
    /// Top of the line box, mm from the top page edge
    pub y_mm: f32,
    /// Line box height
    pub line_mm: f32,
    /// Font size in points
    pub size_pt: f32,
    /// Font face
    pub style: FontStyle,
    /// Fill color
    pub color: RunColor,
}

/// One laid-out page
#[derive(Debug, Clone, Default)]
pub struct ComposedPage {
    /// Text runs in paint order
    pub runs: Vec<TextRun>,
}

/// Cursor-based page composer with automatic bottom-margin breaks
struct Composer {
    pages: Vec<ComposedPage>,
    cursor_mm: f32,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: vec![ComposedPage::default()],
            cursor_mm: MARGIN_TOP_MM,
        }
    }

    /// Force a new page, resetting the cursor to the top margin
    fn page_break(&mut self) {
        self.pages.push(ComposedPage::default());
        self.cursor_mm = MARGIN_TOP_MM;
    }

    /// Break the page if the next line box would cross the bottom margin
    fn ensure_room(&mut self, line_mm: f32) {
        if self.cursor_mm + line_mm > PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM {
            self.page_break();
        }
    }

    /// Vertical gap; overflow is resolved by the next line's `ensure_room`
    fn spacer(&mut self, mm: f32) {
        self.cursor_mm += mm;
    }

    fn line(
        &mut self,
        text: &str,
        size_pt: f32,
        line_mm: f32,
        style: FontStyle,
        color: RunColor,
        centered: bool,
    ) {
        self.ensure_room(line_mm);
        let x_mm = if centered {
            MARGIN_SIDE_MM + (CONTENT_WIDTH_MM - text_width_mm(text, size_pt)).max(0.0) / 2.0
        } else {
            MARGIN_SIDE_MM
        };
        let run = TextRun {
            text: text.to_string(),
            x_mm,
            y_mm: self.cursor_mm,
            line_mm,
            size_pt,
            style,
            color,
        };
        // new() and page_break() both guarantee a current page
        self.pages.last_mut().unwrap().runs.push(run);
        self.cursor_mm += line_mm;
    }

    /// Sanitize, wrap, and emit a text block line by line
    fn block(
        &mut self,
        text: &str,
        size_pt: f32,
        line_mm: f32,
        style: FontStyle,
        color: RunColor,
        centered: bool,
    ) {
        let clean = TextSanitizer::sanitize(text);
        for line in wrap(&clean, size_pt, CONTENT_WIDTH_MM) {
            self.line(&line, size_pt, line_mm, style, color, centered);
        }
    }

    fn into_pages(self) -> Vec<ComposedPage> {
        self.pages
    }
}

/// Renders an assembled [`Document`] into a paginated PDF
pub struct PdfRenderer;

impl PdfRenderer {
    /// Lay out the document into pages of positioned text runs
    pub fn compose(document: &Document) -> Vec<ComposedPage> {
        let mut c = Composer::new();
        let meta = &document.metadata;

        // Title block, centered
        c.block(
            &meta.title,
            TITLE_SIZE_PT,
            TITLE_LINE_MM,
            FontStyle::Bold,
            RunColor::Body,
            true,
        );
        c.spacer(2.0);
        c.block(
            &meta.url,
            BODY_SIZE_PT,
            BODY_LINE_MM,
            FontStyle::Regular,
            RunColor::Body,
            true,
        );
        c.spacer(2.0);
        c.block(
            &meta.description,
            BODY_SIZE_PT,
            BODY_LINE_MM,
            FontStyle::Regular,
            RunColor::Body,
            true,
        );
        c.spacer(8.0);

        for section in &document.sections {
            c.block(
                &section.heading,
                HEADING_SIZE_PT,
                HEADING_LINE_MM,
                FontStyle::Bold,
                RunColor::Body,
                false,
            );
            c.spacer(1.0);
            c.block(
                &section.body.join("\n"),
                BODY_SIZE_PT,
                BODY_LINE_MM,
                FontStyle::Regular,
                RunColor::Body,
                false,
            );
            c.spacer(4.0);
        }

        if !document.links.is_empty() {
            c.block(
                "Links:",
                HEADING_SIZE_PT,
                HEADING_LINE_MM,
                FontStyle::Bold,
                RunColor::Body,
                false,
            );
            for link in &document.links {
                let line = format!("{} -> {}", link.display_text, link.target_url);
                c.block(
                    &line,
                    BODY_SIZE_PT,
                    BODY_LINE_MM,
                    FontStyle::Regular,
                    RunColor::Link,
                    false,
                );
                c.spacer(2.0);
            }
        }

        if document.has_tabs() {
            c.page_break();
            c.block(
                "Tabbed Content",
                TITLE_SIZE_PT,
                TITLE_LINE_MM,
                FontStyle::Bold,
                RunColor::Body,
                false,
            );
            c.spacer(4.0);
            for tab in &document.tabs {
                c.block(
                    &tab.label,
                    HEADING_SIZE_PT,
                    HEADING_LINE_MM,
                    FontStyle::Bold,
                    RunColor::Body,
                    false,
                );
                c.spacer(1.0);
                c.block(
                    &tab.content,
                    BODY_SIZE_PT,
                    BODY_LINE_MM,
                    FontStyle::Regular,
                    RunColor::Body,
                    false,
                );
                c.spacer(4.0);
            }
        }

        c.into_pages()
    }

    /// Compose the document and write the finished PDF to `path`
    ///
    /// Any failure here is fatal to the run; there is no partial-document
    /// fallback.
    #[instrument(skip(document))]
    pub fn render_to_file(
        document: &Document,
        path: &Path,
    ) -> std::result::Result<(), RenderError> {
        let pages = Self::compose(document);
        debug!("Composed {} pages", pages.len());

        let doc_title = TextSanitizer::sanitize(&document.metadata.title);
        let (doc, first_page, first_layer) = PdfDocument::new(
            doc_title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "content",
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::FontUnavailable(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::FontUnavailable(e.to_string()))?;

        for (index, page) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                doc.get_page(page_idx).get_layer(layer_idx)
            };

            for run in &page.runs {
                let font = match run.style {
                    FontStyle::Regular => &regular,
                    FontStyle::Bold => &bold,
                };
                let baseline_mm = run.y_mm + run.line_mm * BASELINE_RATIO;
                layer.set_fill_color(run.color.fill());
                layer.use_text(
                    run.text.clone(),
                    run.size_pt,
                    Mm(run.x_mm),
                    Mm(PAGE_HEIGHT_MM - baseline_mm),
                    font,
                );
            }
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        info!("PDF written to {}", path.display());
        Ok(())
    }
}
