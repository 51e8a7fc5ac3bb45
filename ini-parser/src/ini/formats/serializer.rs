//! INI serializer
//!
//! Writes each section as a `[name]` line followed by one `key = value` line per
//! property. Comments and the original line order are not preserved; parsing
//! the output gives back the same section map.

use crate::ini::document::{Section, Sections};

const DEFAULT_SEPARATOR: &str = " = ";

/// Knobs for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit sections in ascending name order instead of map order
    pub sort_sections: bool,
    /// Emit keys in ascending order instead of map order
    pub sort_keys: bool,
    pub blank_line_between_sections: bool,
    separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sort_sections: true,
            sort_keys: true,
            blank_line_between_sections: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RenderOptions {
    /// Options with the default `" = "` separator.
    pub fn new(sort_sections: bool, sort_keys: bool, blank_line_between_sections: bool) -> Self {
        Self {
            sort_sections,
            sort_keys,
            blank_line_between_sections,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a custom key/value separator.
    ///
    /// Returns `None` unless the separator contains exactly one `=`; anything
    /// else would not parse back as a property.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Option<Self> {
        let separator = separator.into();
        if !is_valid_separator(&separator) {
            return None;
        }
        self.separator = separator;
        Some(self)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// Whether a separator renders lines that parse back as properties.
pub fn is_valid_separator(separator: &str) -> bool {
    separator.matches('=').count() == 1 && separator.chars().all(|c| c == '=' || c == ' ')
}

/// Render a section map as INI text. Every line, the last included, ends in `\n`.
pub fn render(sections: &Sections, options: &RenderOptions) -> String {
    let mut names: Vec<&String> = sections.keys().collect();
    if options.sort_sections {
        names.sort();
    }

    let mut out = String::new();
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 && options.blank_line_between_sections {
            out.push('\n');
        }
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        render_section(&mut out, &sections[name], options);
    }
    out
}

fn render_section(out: &mut String, section: &Section, options: &RenderOptions) {
    let mut entries: Vec<(&String, &String)> = section.iter().collect();
    if options.sort_keys {
        entries.sort();
    }
    for (key, value) in entries {
        out.push_str(key);
        out.push_str(&options.separator);
        out.push_str(value);
        out.push('\n');
    }
}
