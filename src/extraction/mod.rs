//! Content extraction module
//!
//! This module turns the parsed page tree into the structured fragments of
//! the [`Document`](crate::document::Document): metadata, heading sections,
//! and links, plus the text sanitizer shared with the PDF renderer.

pub mod links;
pub mod metadata;
pub mod sanitize;
pub mod sections;

pub use links::LinkExtractor;
pub use metadata::MetadataExtractor;
pub use sanitize::TextSanitizer;
pub use sections::SectionExtractor;
