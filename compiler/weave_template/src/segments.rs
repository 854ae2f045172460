//! Splitting a template into literal text and placeholder holes.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::Placeholder;

/// A piece of a template.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Segment<'a> {
    /// Literal text with `{{` / `}}` already collapsed to single braces.
    Literal(Cow<'a, str>),
    /// The placeholder at this position.
    Hole(&'a Placeholder),
}

/// Split `template` around `placeholders` (as returned by
/// [`parse`](crate::parse) for the same text).
///
/// Text after an unterminated placeholder is kept as a literal.
pub fn segments<'a>(template: &'a str, placeholders: &'a [Placeholder]) -> SmallVec<[Segment<'a>; 8]> {
    let mut out = SmallVec::new();
    let mut cursor = 0;

    for placeholder in placeholders {
        if placeholder.range.start > cursor {
            out.push(Segment::Literal(unescape(&template[cursor..placeholder.range.start])));
        }
        out.push(Segment::Hole(placeholder));
        cursor = placeholder.range.end;
    }

    if cursor < template.len() {
        out.push(Segment::Literal(unescape(&template[cursor..])));
    }

    out
}

/// Collapse doubled braces in literal text.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if text.contains("{{") || text.contains("}}") {
        Cow::Owned(text.replace("{{", "{").replace("}}", "}"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests;
