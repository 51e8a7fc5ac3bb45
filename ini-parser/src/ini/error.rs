//! Error types shared by the parser, the document accessors and the loader.
//!
//! Every failure is a variant of [`IniError`]. Parse-time variants carry the
//! 1-based line number they were raised on; lookup variants carry the names
//! that were asked for. [`ErrorKind`] strips the payload so callers can compare
//! kinds directly.

use std::path::PathBuf;
use thiserror::Error;

/// Payload-free classification of an [`IniError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFilePath,
    WriteFailed,
    NullReference,
    SectionNotExist,
    KeyNotExist,
    InvalidValue,
    HasNoData,
    GlobalProperty,
    EmptySectionName,
    EmptyKey,
    SyntaxError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    /// The file could not be opened or read
    #[error("couldn't find the file in the path you provided: {} ({message})", .path.display())]
    InvalidFilePath { path: PathBuf, message: String },

    /// The file could not be created, truncated or written
    #[error("couldn't write the file {}: {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },

    /// The document has no backing section map
    #[error("you tried to access object that doesn't exist")]
    NullReference,

    #[error("the section you tried to access doesn't exist: [{section}]")]
    SectionNotExist { section: String },

    #[error("the key you tried to access doesn't exist: [{section}] {key}")]
    KeyNotExist { section: String, key: String },

    /// A value that would not render as a single property line
    #[error("the value for [{section}] {key} can't contain '=' or line breaks: {value:?}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    /// The document is initialized but holds no sections
    #[error("there is no data yet, you may didn't load data")]
    HasNoData,

    /// A property appeared before any section header
    #[error("line {line}: global keys are not allowed")]
    GlobalProperty { line: usize },

    #[error("line {line}: you should provide a section name")]
    EmptySectionName { line: usize },

    #[error("line {line}: you should provide a key for the property")]
    EmptyKey { line: usize },

    #[error("line {line}: syntax error, can't understand this line: {content:?}")]
    SyntaxError { line: usize, content: String },
}

impl IniError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IniError::InvalidFilePath { .. } => ErrorKind::InvalidFilePath,
            IniError::WriteFailed { .. } => ErrorKind::WriteFailed,
            IniError::NullReference => ErrorKind::NullReference,
            IniError::SectionNotExist { .. } => ErrorKind::SectionNotExist,
            IniError::KeyNotExist { .. } => ErrorKind::KeyNotExist,
            IniError::InvalidValue { .. } => ErrorKind::InvalidValue,
            IniError::HasNoData => ErrorKind::HasNoData,
            IniError::GlobalProperty { .. } => ErrorKind::GlobalProperty,
            IniError::EmptySectionName { .. } => ErrorKind::EmptySectionName,
            IniError::EmptyKey { .. } => ErrorKind::EmptyKey,
            IniError::SyntaxError { .. } => ErrorKind::SyntaxError,
        }
    }

    /// Line the error was raised on, for errors produced while parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::GlobalProperty { line }
            | IniError::EmptySectionName { line }
            | IniError::EmptyKey { line }
            | IniError::SyntaxError { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ignores_payload() {
        let a = IniError::KeyNotExist {
            section: "owner".to_string(),
            key: "name".to_string(),
        };
        let b = IniError::KeyNotExist {
            section: "database".to_string(),
            key: "port".to_string(),
        };
        assert_ne!(a, b);
        assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn test_line_only_for_parse_errors() {
        assert_eq!(IniError::EmptyKey { line: 3 }.line(), Some(3));
        assert_eq!(IniError::HasNoData.line(), None);
    }

    #[test]
    fn test_display_includes_line() {
        let err = IniError::SyntaxError {
            line: 2,
            content: "name====value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 2: syntax error, can't understand this line: \"name====value\""
        );
    }
}
