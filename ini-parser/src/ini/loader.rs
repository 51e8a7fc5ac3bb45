//! Document loading utilities
//!
//! Thin file I/O around the parser. [`DocumentLoader`] holds source text read
//! from a file and parses it on demand; [`read_file`] and
//! [`write_file`] are the raw shims used by
//! [`Document`](crate::ini::document::Document).
//!
//! # Example
//!
//! ```text
//! let doc = DocumentLoader::from_path("example.ini")?.parse()?;
//! ```

use crate::ini::document::Document;
use crate::ini::error::IniError;
use std::fs;
use std::path::Path;

/// Read a whole file as text.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, IniError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading file");
    fs::read_to_string(path).map_err(|err| IniError::InvalidFilePath {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Write text to a file, creating or truncating it.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<(), IniError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");
    fs::write(path, content).map_err(|err| IniError::WriteFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Source text with parse shortcuts.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IniError> {
        let source = read_file(path)?;
        Ok(DocumentLoader { source })
    }

    /// Parse the source into a Document
    pub fn parse(&self) -> Result<Document, IniError> {
        Document::parse(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::error::ErrorKind;

    #[test]
    fn test_missing_file_is_invalid_path() {
        let err = read_file("/invalid/file/path/example.ini").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFilePath);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ini");
        write_file(&path, "[a]\nk = v\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "[a]\nk = v\n");
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ini");
        write_file(&path, "[a]\nk = a much longer value\n").unwrap();
        write_file(&path, "[a]\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "[a]\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ini");
        let err = write_file(&path, "[a]\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailed);
    }

    #[test]
    fn test_loader_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.ini");
        write_file(&path, "[a]\nk = v\n").unwrap();
        let doc = DocumentLoader::from_path(&path).unwrap().parse().unwrap();
        assert_eq!(doc.get("a", "k").unwrap(), "v");
    }
}
