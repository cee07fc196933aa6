//! PDF output module
//!
//! Text measurement, page composition, and final emission through
//! `printpdf`. Layout is pure and testable; only the last step touches the
//! filesystem.

pub mod renderer;
pub mod text;

pub use renderer::{ComposedPage, FontStyle, PdfRenderer, RunColor, TextRun};
