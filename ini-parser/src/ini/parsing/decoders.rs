//! Line decoders
//!
//! Extract data from lines the classifier has already tagged. The decoders
//! trust the classification: a section header holds exactly one bracket pair at
//! its trimmed ends, and a property holds exactly one separator.

use crate::ini::document::{Key, SectionName, Value};
use crate::ini::error::IniError;
use crate::ini::token::{LineToken, Token};

/// Decode the name of a section header line.
///
/// All whitespace is removed, including whitespace inside the brackets, so
/// `[ my section ]` names the section `mysection`. A bracket pair with nothing
/// else in it is an error.
pub fn decode_section_name(line: &LineToken<'_>) -> Result<SectionName, IniError> {
    let name: String = line
        .source_tokens
        .iter()
        .filter(|(token, _)| !token.is_whitespace() && !token.is_bracket())
        .map(|(_, span)| line.slice(span))
        .collect();

    if name.is_empty() {
        return Err(IniError::EmptySectionName { line: line.number });
    }
    Ok(name)
}

/// Decode a property line into its trimmed key and value.
///
/// The value may be empty; the key may not.
pub fn decode_property(line: &LineToken<'_>) -> Result<(Key, Value), IniError> {
    let separator = line
        .source_tokens
        .iter()
        .find(|(token, _)| *token == Token::Equals)
        .map(|(_, span)| span.clone())
        .ok_or_else(|| IniError::SyntaxError {
            line: line.number,
            content: line.text.to_string(),
        })?;

    let key = line.text[..separator.start].trim();
    let value = line.text[separator.end..].trim();

    if key.is_empty() {
        return Err(IniError::EmptyKey { line: line.number });
    }
    Ok((key.to_string(), value.to_string()))
}
