//! Fixed-arity formatters for fast-path calls.
//!
//! A fast-path call's template has exactly one placeholder per argument, in
//! argument order. The formatter is built once per call site and then fills
//! placeholder `i` with argument `i`; no field list is ever allocated.

use std::fmt;
use std::sync::OnceLock;

use smallvec::SmallVec;
use weave_template::{MessageTemplate, Segment};

use crate::render::{alignment, write_aligned};
use crate::FormatError;

/// Largest argument count a fixed-arity formatter accepts.
pub const MAX_FAST_ARITY: usize = 6;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Piece {
    Literal(String),
    Arg { index: usize, align: Option<i32> },
}

/// A pre-split template bound to a fixed argument count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedFormatter {
    template: String,
    arity: usize,
    pieces: SmallVec<[Piece; 8]>,
}

impl FixedFormatter {
    pub fn new(template: &str, arity: usize) -> Result<Self, FormatError> {
        if arity > MAX_FAST_ARITY {
            return Err(FormatError::ArityTooLarge {
                arity,
                max: MAX_FAST_ARITY,
            });
        }
        let parsed = MessageTemplate::new(template);
        let placeholders = parsed.placeholders().len();
        if placeholders != arity {
            return Err(FormatError::PlaceholderMismatch { placeholders, arity });
        }

        let pieces = parsed
            .segments()
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Piece::Literal(text.into_owned()),
                Segment::Hole(placeholder) => Piece::Arg {
                    index: placeholder.position,
                    align: alignment(placeholder),
                },
            })
            .collect();

        Ok(FixedFormatter {
            template: template.to_string(),
            arity,
            pieces,
        })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fill the template with `args`, which must number exactly `arity`.
    pub fn format(&self, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
        if args.len() != self.arity {
            return Err(FormatError::ValueCountMismatch {
                expected: self.arity,
                actual: args.len(),
            });
        }
        let mut out = String::with_capacity(self.template.len() + 16);
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Arg { index, align } => write_aligned(&mut out, args[*index], *align),
            }
        }
        Ok(out)
    }
}

/// A formatter built on first use, suitable for a `static` per call site.
///
/// ```
/// use weave_rt::FormatterCell;
///
/// static HELLO: FormatterCell = FormatterCell::new("Hello {name}", 1);
/// let text = HELLO.get().and_then(|f| f.format(&[&"world"]));
/// assert_eq!(text.as_deref(), Ok("Hello world"));
/// ```
pub struct FormatterCell {
    template: &'static str,
    arity: usize,
    cell: OnceLock<Result<FixedFormatter, FormatError>>,
}

impl FormatterCell {
    pub const fn new(template: &'static str, arity: usize) -> Self {
        FormatterCell {
            template,
            arity,
            cell: OnceLock::new(),
        }
    }

    /// The formatter, building it on the first call.
    pub fn get(&self) -> Result<&FixedFormatter, FormatError> {
        self.cell
            .get_or_init(|| {
                tracing::trace!(template = self.template, arity = self.arity, "building formatter");
                FixedFormatter::new(self.template, self.arity)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests;
