//! Text measurement and wrapping for the PDF layout
//!
//! The renderer uses the built-in Helvetica faces, so line breaking is done
//! against Helvetica's AFM advance widths (millesimal units of the font
//! size). Bold runs reuse the regular table; Helvetica-Bold advances differ
//! by a few percent at most, within the margin the page layout tolerates.

/// Points to millimeters
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Advance width of one character in 1/1000 of the font size
///
/// ASCII widths are Helvetica AFM values; everything else in the Latin-1
/// range falls back to the lowercase-letter width.
fn advance(ch: char) -> u32 {
    match ch {
        ' ' | ',' | '.' | '/' | ':' | ';' | '!' => 278,
        '\'' => 191,
        '|' => 260,
        'i' | 'j' | 'l' => 222,
        'f' | 't' | 'I' | '[' | ']' | '\\' => 278,
        'r' | '(' | ')' | '-' | '`' => 333,
        '"' => 355,
        '*' => 389,
        '^' => 469,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' | '_' => 556,
        '0'..='9' | '#' | '$' | '?' | 'L' => 556,
        '+' | '<' | '=' | '>' | '~' => 584,
        'F' | 'T' | 'Z' => 611,
        'w' | 'H' | 'N' | 'R' | 'U' => 722,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | '&' => 667,
        'C' | 'D' => 722,
        'G' | 'O' | 'Q' => 778,
        'm' | 'M' => 833,
        '%' => 889,
        'W' => 944,
        '@' => 1015,
        '{' | '}' => 334,
        _ => 556,
    }
}

/// Width of a string at the given font size, in millimeters
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(advance).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap of a text block into lines no wider than `max_width_mm`
///
/// Input newlines are respected as hard breaks, blank lines survive, and a
/// single word wider than the line is split mid-word rather than overflowing.
pub fn wrap(text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for input_line in text.split('\n') {
        if input_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_line(input_line, size_pt, max_width_mm, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, size_pt: f32, max_width_mm: f32, out: &mut Vec<String>) {
    let mut current = String::new();
    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, size_pt) <= max_width_mm {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }

        if text_width_mm(word, size_pt) <= max_width_mm {
            current = word.to_string();
        } else {
            current = split_oversized(word, size_pt, max_width_mm, out);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Hard-split a word that cannot fit on one line; returns the remainder
fn split_oversized(
    word: &str,
    size_pt: f32,
    max_width_mm: f32,
    out: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if text_width_mm(&chunk, size_pt) > max_width_mm && chunk.chars().count() > 1 {
            chunk.pop();
            out.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}
