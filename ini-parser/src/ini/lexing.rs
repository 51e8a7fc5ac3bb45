//! Lexing
//!
//! Splits source text into lines, tokenizes each line and tags it with its
//! [`LineType`]. Lines are independent: classification never looks at a
//! neighbouring line, so the whole stage is a pure function of the input.

pub mod line_classification;

use crate::ini::token::{tokenize, LineToken, LineType};
pub use line_classification::classify_line_tokens;

/// Lex a source string into classified lines.
///
/// Lines end at `\n`; a `\r` directly before it is dropped. A trailing newline
/// does not produce an extra empty line.
pub fn lex(source: &str) -> impl Iterator<Item = LineToken<'_>> {
    source.lines().enumerate().map(|(index, text)| {
        let source_tokens = tokenize(text);
        let line_type = classify_line_tokens(&source_tokens);
        LineToken {
            number: index + 1,
            text,
            source_tokens,
            line_type,
        }
    })
}

/// Classify a single line of text (no trailing newline).
pub fn classify_line(line: &str) -> LineType {
    classify_line_tokens(&tokenize(line))
}
