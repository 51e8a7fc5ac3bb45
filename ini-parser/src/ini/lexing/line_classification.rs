//! Line Classification
//!
//! Determines the shape of a line from its tokens. Shapes are recognized by
//! counting structural tokens rather than by a grammar, and the checks run in a
//! fixed priority order:
//!
//! 1. blank: no tokens, or whitespace only
//! 2. section header: trimmed line starts with `[`, ends with `]`, and holds
//!    exactly one of each
//! 3. property: exactly one `=` anywhere on the line
//! 4. comment: the very first character is `;`
//! 5. anything else is unsupported
//!
//! Because properties are checked before comments, `; a = b` is a property.
//! Surrounding whitespace never disqualifies a property, but a second `=` does:
//! `name====value` is unsupported rather than "first separator wins".
use crate::ini::token::{LineType, Token};
use std::ops::Range;

/// Determine the type of a line based on its tokens.
pub fn classify_line_tokens(tokens: &[(Token, Range<usize>)]) -> LineType {
    if is_blank_line(tokens) {
        return LineType::Blank;
    }
    if is_section_header_line(tokens) {
        return LineType::SectionHeader;
    }
    if is_property_line(tokens) {
        return LineType::Property;
    }
    if is_comment_line(tokens) {
        return LineType::Comment;
    }
    LineType::Unsupported
}

/// Check if line is blank (empty, or only whitespace)
fn is_blank_line(tokens: &[(Token, Range<usize>)]) -> bool {
    tokens.iter().all(|(t, _)| t.is_whitespace())
}

/// Check if the trimmed line is a single bracket pair
fn is_section_header_line(tokens: &[(Token, Range<usize>)]) -> bool {
    let mut content = tokens.iter().map(|(t, _)| t).filter(|t| !t.is_whitespace());
    let first = content.next();
    let last = content.next_back();
    if first != Some(&Token::OpenBracket) || last != Some(&Token::CloseBracket) {
        return false;
    }
    count(tokens, Token::OpenBracket) == 1 && count(tokens, Token::CloseBracket) == 1
}

/// Check if line has exactly one separator
fn is_property_line(tokens: &[(Token, Range<usize>)]) -> bool {
    count(tokens, Token::Equals) == 1
}

/// Check if the first character of the untrimmed line is the comment marker
fn is_comment_line(tokens: &[(Token, Range<usize>)]) -> bool {
    matches!(tokens.first(), Some((Token::Semicolon, _)))
}

fn count(tokens: &[(Token, Range<usize>)], kind: Token) -> usize {
    tokens.iter().filter(|(t, _)| *t == kind).count()
}
