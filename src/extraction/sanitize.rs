//! Text sanitization for the Latin-1 output encoding
//!
//! The PDF renderer uses the built-in WinAnsi-encoded fonts, so every string
//! that reaches it has to survive a Latin-1 round trip. Typographic Unicode
//! gets mapped to ASCII equivalents first; whatever still falls outside the
//! encodable range is dropped rather than rejected.

/// Typographic characters with a plain-ASCII stand-in
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2192}', "->"),  // right arrow
    ('\u{2190}', "<-"),  // left arrow
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "--"),  // em dash
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{201C}', "\""),  // left double quotation mark
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{2022}', "*"),   // bullet
    ('\u{2026}', "..."), // horizontal ellipsis
];

/// Maps arbitrary extracted text into the Latin-1 output character set
pub struct TextSanitizer;

impl TextSanitizer {
    /// Sanitize text for the output encoding
    ///
    /// Pure and idempotent: replacements produce ASCII, and characters the
    /// first pass keeps are kept by every later pass.
    pub fn sanitize(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
                Some((_, ascii)) => out.push_str(ascii),
                None if Self::is_encodable(ch) => out.push(ch),
                None => {} // unencodable and no stand-in: dropped
            }
        }
        out
    }

    /// Whether a character is representable in Latin-1
    fn is_encodable(ch: char) -> bool {
        (ch as u32) <= 0xFF
    }
}
