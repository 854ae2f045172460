//! Message-template parsing.
//!
//! A message template is literal text with `{name}` placeholders, `{{` and
//! `}}` escapes, and optional `,alignment` / `:format` suffixes. This crate
//! turns a template into its ordered placeholder list and splits it into
//! literal and placeholder segments for rendering.
//!
//! Parsing never fails. An unterminated placeholder stops the scan, and the
//! caller decides whether that deserves a diagnostic.

mod parser;
mod segments;

pub use parser::{parse, scan, ParsedTemplate, Placeholder};
pub use segments::{segments, unescape, Segment};

/// An immutable template together with its parse.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MessageTemplate {
    text: String,
    parsed: ParsedTemplate,
}

impl MessageTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = scan(&text);
        MessageTemplate { text, parsed }
    }

    /// The raw template text, exactly as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.parsed.placeholders
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parsed.names()
    }

    pub fn is_malformed(&self) -> bool {
        self.parsed.is_malformed()
    }

    pub fn segments(&self) -> smallvec::SmallVec<[Segment<'_>; 8]> {
        segments(&self.text, &self.parsed.placeholders)
    }
}
