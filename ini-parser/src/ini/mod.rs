//! Main module for ini library functionality

pub mod document;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod token;
