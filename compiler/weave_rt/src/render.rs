//! Message rendering shared by both payload representations.

use std::fmt::{self, Write};

use weave_template::{Placeholder, Segment};

/// Alignment widths at or above this are ignored.
pub(crate) const MAX_ALIGNMENT: u32 = 1_000_000;

/// Width and side from a `,N` alignment suffix. Positive pads on the left
/// (right-aligns), negative pads on the right.
pub(crate) fn alignment(placeholder: &Placeholder) -> Option<i32> {
    let suffix = placeholder.format.as_deref()?.strip_prefix(',')?;
    let width: i32 = suffix.split(':').next()?.trim().parse().ok()?;
    (width.unsigned_abs() < MAX_ALIGNMENT).then_some(width)
}

/// Append `value` to `out`, padded per `align`.
pub(crate) fn write_aligned(out: &mut String, value: &dyn fmt::Display, align: Option<i32>) {
    let Some(width) = align else {
        // Writing to a String cannot fail.
        let _ = write!(out, "{value}");
        return;
    };
    // Pad the rendered text; not every Display impl honours width flags.
    let text = value.to_string();
    let w = width.unsigned_abs() as usize;
    let _ = if width < 0 {
        write!(out, "{text:<w$}")
    } else {
        write!(out, "{text:>w$}")
    };
}

/// Render `segments`, filling each hole with `lookup`. A hole `lookup`
/// cannot fill is reproduced as written.
pub(crate) fn render<'v>(
    template: &str,
    segments: &[Segment<'_>],
    mut lookup: impl FnMut(&Placeholder) -> Option<&'v dyn fmt::Display>,
) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Hole(placeholder) => match lookup(placeholder) {
                Some(value) => write_aligned(&mut out, value, alignment(placeholder)),
                None => out.push_str(&template[placeholder.range.clone()]),
            },
        }
    }
    out
}
