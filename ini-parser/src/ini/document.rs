//! Document model
//!
//! A [`Document`] maps section names to sections, and each section maps keys to
//! raw string values. Values are never converted; `"payroll.dat"` keeps its
//! quotes.
//!
//! A document is either *uninitialized* (no backing map, the `Default`) or
//! *initialized* (a map, possibly empty). The two are kept apart on purpose:
//! lookups on an uninitialized document fail with `NullReference`, while an
//! initialized one reports the missing section or key. Use [`Document::new`]
//! for an initialized, empty document.

use crate::ini::error::IniError;
use crate::ini::formats::{render, RenderOptions};
use crate::ini::loader;
use crate::ini::parsing::parse_sections;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

pub type SectionName = String;
pub type Key = String;
pub type Value = String;
pub type Section = HashMap<Key, Value>;
pub type Sections = HashMap<SectionName, Section>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: Option<Sections>,
}

impl Document {
    /// An initialized document with no sections.
    pub fn new() -> Self {
        Self {
            sections: Some(Sections::new()),
        }
    }

    /// Parse a document, failing on the first structural error.
    pub fn parse(source: &str) -> Result<Self, IniError> {
        let sections = parse_sections(source)?;
        Ok(Self::from(sections))
    }

    pub fn is_initialized(&self) -> bool {
        self.sections.is_some()
    }

    /// Replace the contents with the sections parsed from `source`.
    ///
    /// On failure the document holds whatever was parsed before the failing
    /// line, and should not be trusted as fully loaded.
    pub fn load_from_str(&mut self, source: &str) -> Result<(), IniError> {
        match parse_sections(source) {
            Ok(sections) => {
                self.sections = Some(sections);
                Ok(())
            }
            Err(partial) => {
                self.sections = Some(partial.sections);
                Err(partial.error)
            }
        }
    }

    /// Read a file and return its raw contents.
    ///
    /// The document is left untouched; pass the text to
    /// [`load_from_str`](Self::load_from_str) to parse it.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<String, IniError> {
        loader::read_file(path)
    }

    /// The full section map, or `None` if the document is uninitialized.
    pub fn sections(&self) -> Option<&Sections> {
        self.sections.as_ref()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.as_ref()?.get(name)
    }

    /// Section names in ascending order. Empty for an uninitialized document.
    pub fn section_names(&self) -> Vec<SectionName> {
        let mut names: Vec<SectionName> = self
            .sections
            .iter()
            .flat_map(|sections| sections.keys().cloned())
            .collect();
        names.sort();
        names
    }

    pub fn get(&self, section: &str, key: &str) -> Result<&str, IniError> {
        let sections = self.sections.as_ref().ok_or(IniError::NullReference)?;
        let entries = sections
            .get(section)
            .ok_or_else(|| IniError::SectionNotExist {
                section: section.to_string(),
            })?;
        entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::KeyNotExist {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Overwrite the value of an existing key.
    ///
    /// Never creates sections or keys; both must already exist. Values holding
    /// `=`, `\n` or `\r` are rejected since they would not render back as a
    /// single property line.
    pub fn set(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), IniError> {
        let sections = self.sections.as_mut().ok_or(IniError::NullReference)?;
        let entries = sections
            .get_mut(section)
            .ok_or_else(|| IniError::SectionNotExist {
                section: section.to_string(),
            })?;
        let slot = entries
            .get_mut(key)
            .ok_or_else(|| IniError::KeyNotExist {
                section: section.to_string(),
                key: key.to_string(),
            })?;
        let value = value.into();
        if !is_valid_value(&value) {
            return Err(IniError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value,
            });
        }
        *slot = value;
        Ok(())
    }

    /// Render with the default options: sorted sections and keys, `key = value`.
    pub fn render(&self) -> Result<String, IniError> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String, IniError> {
        let sections = self.sections.as_ref().ok_or(IniError::NullReference)?;
        if sections.is_empty() {
            return Err(IniError::HasNoData);
        }
        Ok(render(sections, options))
    }

    /// Render and write to `path`, creating or truncating it.
    ///
    /// Nothing is written when rendering fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), IniError> {
        let content = self.render()?;
        loader::write_file(path, &content)
    }
}

/// Whether a value survives a render/parse round-trip unchanged.
pub fn is_valid_value(value: &str) -> bool {
    !value.contains(['=', '\n', '\r']) && value.trim() == value
}

impl From<Sections> for Document {
    fn from(sections: Sections) -> Self {
        Self {
            sections: Some(sections),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::error::ErrorKind;

    fn owner_document() -> Document {
        let mut owner = Section::new();
        owner.insert("name".to_string(), "salah".to_string());
        let mut sections = Sections::new();
        sections.insert("owner".to_string(), owner);
        Document::from(sections)
    }

    #[test]
    fn test_default_is_uninitialized() {
        let doc = Document::default();
        assert!(!doc.is_initialized());
        assert!(doc.sections().is_none());
        assert!(doc.section_names().is_empty());
    }

    #[test]
    fn test_new_is_initialized_and_empty() {
        let doc = Document::new();
        assert!(doc.is_initialized());
        assert_eq!(doc.sections(), Some(&Sections::new()));
    }

    #[test]
    fn test_get() {
        let doc = owner_document();
        assert_eq!(doc.get("owner", "name").unwrap(), "salah");
    }

    #[test]
    fn test_get_failures() {
        assert_eq!(
            Document::default().get("owner", "name").unwrap_err(),
            IniError::NullReference
        );
        let doc = owner_document();
        assert_eq!(
            doc.get("employee", "name").unwrap_err().kind(),
            ErrorKind::SectionNotExist
        );
        assert_eq!(
            doc.get("owner", "address").unwrap_err().kind(),
            ErrorKind::KeyNotExist
        );
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut doc = owner_document();
        doc.set("owner", "name", "ahmed").unwrap();
        assert_eq!(doc.get("owner", "name").unwrap(), "ahmed");
    }

    #[test]
    fn test_set_never_creates() {
        let mut doc = owner_document();
        assert_eq!(
            doc.set("owner", "address", "mahalla").unwrap_err().kind(),
            ErrorKind::KeyNotExist
        );
        assert_eq!(
            doc.set("employee", "name", "salah").unwrap_err().kind(),
            ErrorKind::SectionNotExist
        );
        assert_eq!(
            Document::default().set("owner", "name", "x").unwrap_err(),
            IniError::NullReference
        );
        assert_eq!(doc, owner_document());
    }

    #[test]
    fn test_set_rejects_values_that_break_rendering() {
        let mut doc = owner_document();
        for value in ["a=b", "x\n[evil]\nk = v", "x\r", " padded "] {
            let err = doc.set("owner", "name", value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
        }
        assert_eq!(doc, owner_document());

        doc.set("owner", "name", "").unwrap();
        assert_eq!(doc.get("owner", "name").unwrap(), "");
    }

    #[test]
    fn test_set_values_round_trip() {
        let mut doc = owner_document();
        doc.set("owner", "name", "John \"JD\" Doe; [admin]").unwrap();
        let reparsed = Document::parse(&doc.render().unwrap()).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_load_replaces_contents_wholesale() {
        let mut doc = owner_document();
        doc.load_from_str("[database]\nport = 143\n").unwrap();
        assert_eq!(doc.section_names(), vec!["database".to_string()]);
        assert!(doc.section("owner").is_none());
    }

    #[test]
    fn test_failed_load_keeps_partial_sections() {
        let mut doc = Document::default();
        let err = doc.load_from_str("[owner]\nname = x\nbroken\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
        assert!(doc.is_initialized());
        assert_eq!(doc.get("owner", "name").unwrap(), "x");
    }

    #[test]
    fn test_render_failures() {
        assert_eq!(
            Document::default().render().unwrap_err(),
            IniError::NullReference
        );
        assert_eq!(Document::new().render().unwrap_err(), IniError::HasNoData);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Document::parse("[a]\nx = 1\n[b]\ny = 2\n").unwrap();
        let b = Document::parse("[b]\ny = 2\n[a]\nx = 1\n").unwrap();
        assert_eq!(a, b);
    }
}
