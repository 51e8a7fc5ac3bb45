//! Parsing
//!
//! Turns lexed lines into sections. [`decoders`] pull names, keys and values
//! out of single lines; [`engine`] drives them over a whole source and owns the
//! "current section" state.

pub mod decoders;
pub mod engine;

pub use decoders::{decode_property, decode_section_name};
pub use engine::{parse_sections, PartialParse};
