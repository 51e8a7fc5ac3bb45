//! Token definitions for INI lines
//!
//! A line is tokenized on its own (lines never span tokens), so there is no
//! newline token. The tokens only mark the characters that matter for
//! classification: brackets, the property separator, the comment marker and
//! whitespace. Everything else is `Text`.
//!
//! The actual tokenization is handled entirely by logos.

use logos::Logos;
use std::ops::Range;

/// All possible tokens in an INI line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[regex(r"\s+")]
    Whitespace,

    // Catch-all for non-special characters
    #[regex(r"[^\[\]=;\s]+")]
    Text,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpenBracket | Token::CloseBracket)
    }
}

/// The shape a line was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Blank,
    SectionHeader,
    Property,
    Comment,
    /// Matches none of the other shapes
    Unsupported,
}

/// A single source line with its tokens and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LineToken<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: &'a str,
    pub source_tokens: Vec<(Token, Range<usize>)>,
    pub line_type: LineType,
}

impl<'a> LineToken<'a> {
    /// Source text covered by a token span.
    pub fn slice(&self, span: &Range<usize>) -> &'a str {
        &self.text[span.clone()]
    }
}

/// Tokenize a line, keeping each token's byte span within the line.
pub fn tokenize(line: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
