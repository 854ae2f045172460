//! Property-based tests for the template parser.
//!
//! Templates are generated from a skeleton of literal text, escaped braces
//! and placeholders. Parsing must recover exactly the skeleton's placeholder
//! names, in order, regardless of the escapes packed around them.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use weave_template::{parse, scan, segments, Segment};

#[derive(Clone, Debug)]
enum Piece {
    Literal(String),
    OpenEscape,
    CloseEscape,
    Placeholder { name: String, suffix: &'static str },
}

impl Piece {
    fn write(&self, out: &mut String) {
        match self {
            Piece::Literal(text) => out.push_str(text),
            Piece::OpenEscape => out.push_str("{{"),
            Piece::CloseEscape => out.push_str("}}"),
            Piece::Placeholder { name, suffix } => {
                out.push('{');
                out.push_str(name);
                out.push_str(suffix);
                out.push('}');
            }
        }
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,8}").expect("valid regex")
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .!?=,:-]{1,10}").expect("valid regex")
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        3 => literal_strategy().prop_map(Piece::Literal),
        1 => Just(Piece::OpenEscape),
        1 => Just(Piece::CloseEscape),
        3 => (name_strategy(), prop::sample::select(vec!["", ":0", ",5", ":N2", ",-3:x"]))
            .prop_map(|(name, suffix)| Piece::Placeholder { name, suffix }),
    ]
}

fn skeleton_strategy() -> impl Strategy<Value = Vec<Piece>> {
    prop::collection::vec(piece_strategy(), 0..12)
}

fn build(pieces: &[Piece]) -> (String, Vec<String>) {
    let mut text = String::new();
    let mut names = Vec::new();
    for piece in pieces {
        piece.write(&mut text);
        if let Piece::Placeholder { name, .. } = piece {
            names.push(name.clone());
        }
    }
    (text, names)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Re-wrapping the parsed names in braces reproduces the skeleton.
    #[test]
    fn placeholder_skeleton_round_trips(pieces in skeleton_strategy()) {
        let (template, expected) = build(&pieces);
        let parsed: Vec<String> = parse(&template).into_iter().map(|p| p.name).collect();

        let rebuilt: String = parsed.iter().map(|name| format!("{{{name}}}")).collect();
        let skeleton: String = expected.iter().map(|name| format!("{{{name}}}")).collect();
        prop_assert_eq!(rebuilt, skeleton, "template: {:?}", template);
    }

    /// Arbitrary input never panics and the output is internally consistent.
    #[test]
    fn arbitrary_input_is_well_formed(template in ".{0,40}") {
        let parsed = scan(&template);
        let mut last_end = 0;
        for (index, placeholder) in parsed.placeholders.iter().enumerate() {
            prop_assert_eq!(placeholder.position, index);
            prop_assert!(placeholder.range.start >= last_end);
            prop_assert!(placeholder.range.end <= template.len());
            prop_assert!(!placeholder.name.contains(','));
            prop_assert!(!placeholder.name.contains(':'));
            last_end = placeholder.range.end;
        }
    }

    /// Parsing is deterministic.
    #[test]
    fn parse_is_deterministic(template in ".{0,40}") {
        prop_assert_eq!(parse(&template), parse(&template));
    }

    /// Segments visit every placeholder exactly once, in order.
    #[test]
    fn segments_cover_every_placeholder(pieces in skeleton_strategy()) {
        let (template, expected) = build(&pieces);
        let placeholders = parse(&template);
        let holes: Vec<&str> = segments(&template, &placeholders)
            .iter()
            .filter_map(|segment| match segment {
                Segment::Hole(p) => Some(p.name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect();
        prop_assert_eq!(holes, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
