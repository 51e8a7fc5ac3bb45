//! Document parser state machine
//!
//! Folds classified lines into a section map. The machine has two states:
//! before the first section header, and inside a named section. It is
//! fail-fast: the first structural error stops the pass, and the sections
//! built up to that point are handed back with the error.

use crate::ini::document::{Section, SectionName, Sections};
use crate::ini::error::IniError;
use crate::ini::lexing::lex;
use crate::ini::parsing::decoders::{decode_property, decode_section_name};
use crate::ini::token::{LineToken, LineType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParserState {
    NoCurrentSection,
    InSection(SectionName),
}

/// A parse that stopped at an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialParse {
    pub error: IniError,
    /// Sections completed before the failing line
    pub sections: Sections,
}

impl fmt::Display for PartialParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for PartialParse {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<PartialParse> for IniError {
    fn from(partial: PartialParse) -> Self {
        partial.error
    }
}

/// Parse INI source text into a section map.
pub fn parse_sections(source: &str) -> Result<Sections, PartialParse> {
    let mut sections = Sections::new();
    let mut state = ParserState::NoCurrentSection;

    for line in lex(source) {
        if let Err(error) = step(&mut state, &mut sections, &line) {
            tracing::debug!(line = line.number, %error, "parse stopped");
            return Err(PartialParse { error, sections });
        }
    }

    tracing::debug!(sections = sections.len(), "parse complete");
    Ok(sections)
}

/// Apply one line to the machine.
fn step(
    state: &mut ParserState,
    sections: &mut Sections,
    line: &LineToken<'_>,
) -> Result<(), IniError> {
    match line.line_type {
        LineType::Blank | LineType::Comment => Ok(()),
        LineType::SectionHeader => {
            let name = decode_section_name(line)?;
            if sections.insert(name.clone(), Section::new()).is_some() {
                tracing::warn!(section = %name, line = line.number, "duplicate section header resets section");
            } else {
                tracing::debug!(section = %name, line = line.number, "section opened");
            }
            *state = ParserState::InSection(name);
            Ok(())
        }
        LineType::Property => {
            let (key, value) = decode_property(line)?;
            let ParserState::InSection(name) = state else {
                return Err(IniError::GlobalProperty { line: line.number });
            };
            tracing::trace!(section = %name, %key, "property stored");
            sections.entry(name.clone()).or_default().insert(key, value);
            Ok(())
        }
        LineType::Unsupported => Err(IniError::SyntaxError {
            line: line.number,
            content: line.text.to_string(),
        }),
    }
}
