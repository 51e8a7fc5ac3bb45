//! # ini-parser
//!
//! Reader and writer for the INI configuration format.
//!
//! File Layout
//!
//! The crate follows the path text takes through the system:
//!
//! src/ini
//!   ├── token        logos tokens for a single line
//!   ├── lexing       line splitting and line classification
//!   ├── parsing      section/property decoders and the document state machine
//!   ├── document     the in-memory model and its accessors
//!   ├── formats      rendering a document back to INI text
//!   └── loader       reading and writing files
//!
//! Most callers only need [`Document`](ini::document::Document):
//!
//! ```text
//! let mut doc = Document::new();
//! doc.load_from_str("[owner]\nname = John Doe\n")?;
//! assert_eq!(doc.get("owner", "name")?, "John Doe");
//! ```

pub mod ini;

pub use ini::document::{Document, Key, Section, SectionName, Sections, Value};
pub use ini::error::{ErrorKind, IniError};
pub use ini::formats::RenderOptions;
