//! Property-based tests for parse/render round-trips
//!
//! Generated documents are rendered, parsed back, and compared as maps.
//! Generators stay inside the dialect: names and keys have no whitespace
//! padding, brackets, separators or leading comment markers, and values have no
//! separators or line breaks.

use ini_parser::{Document, RenderOptions, Section, Sections};
use proptest::prelude::*;

/// Generate valid section names
fn section_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,10}",
        "[A-Za-z][A-Za-z0-9.-]{0,10}",
    ]
}

/// Generate valid keys, possibly with inner spaces
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,10}",
        "[a-z][a-z0-9]{0,5} [a-z0-9]{1,5}",
    ]
}

/// Generate valid values, including empty and quoted ones
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9.]{1,12}",
        "[a-zA-Z0-9][a-zA-Z0-9 ]{0,10}[a-zA-Z0-9]",
        "\"[a-z.]{1,10}\"",
        "[a-z;\\[\\]]{1,8}",
    ]
}

fn section_strategy() -> impl Strategy<Value = Section> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..6)
}

fn sections_strategy() -> impl Strategy<Value = Sections> {
    prop::collection::hash_map(section_name_strategy(), section_strategy(), 1..6)
}

fn options_strategy() -> impl Strategy<Value = RenderOptions> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(" = "), Just("="), Just(" ="), Just("   =   ")],
    )
        .prop_map(|(sort_sections, sort_keys, blank_line, separator)| {
            RenderOptions::new(sort_sections, sort_keys, blank_line)
                .with_separator(separator)
                .expect("generated separators are valid")
        })
}

proptest! {
    #[test]
    fn test_render_then_parse_preserves_sections(sections in sections_strategy()) {
        let doc = Document::from(sections.clone());
        let text = doc.render().unwrap();
        let reparsed = Document::parse(&text).unwrap();
        prop_assert_eq!(reparsed.sections(), Some(&sections));
    }

    #[test]
    fn test_round_trip_holds_for_any_render_options(
        sections in sections_strategy(),
        options in options_strategy(),
    ) {
        let doc = Document::from(sections);
        let text = doc.render_with(&options).unwrap();
        prop_assert_eq!(Document::parse(&text).unwrap(), doc);
    }

    #[test]
    fn test_section_names_are_sorted(sections in sections_strategy()) {
        let names = Document::from(sections).section_names();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
