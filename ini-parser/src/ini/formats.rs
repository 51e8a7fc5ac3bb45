//! Output formats
//!
//! Rendering a section map back to INI text lives in [`serializer`]. Other
//! formats (JSON, YAML) go through the `serde::Serialize` impl on
//! [`Document`](crate::ini::document::Document) and are left to callers.

pub mod serializer;

pub use serializer::{render, RenderOptions};
