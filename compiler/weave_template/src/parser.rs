//! Brace scanner for message templates.
//!
//! Grammar, informally:
//!
//! ```text
//! template    := (literal | escape | placeholder)*
//! escape      := "{{" | "}}"
//! placeholder := "{" name (("," | ":") suffix)? "}"
//! ```
//!
//! Opening and closing braces are found with run counting rather than a
//! tokenizer: a run of `{` of odd length opens a placeholder at its *last*
//! brace, while a run of `}` of odd length closes at its *first* brace. Even
//! runs are escapes and are skipped. The asymmetry matches the runtime
//! formatter, so templates behave identically at compile time and run time.

use std::ops::Range;

/// Characters that end a placeholder name and start its format suffix.
const FORMAT_DELIMITERS: [u8; 2] = [b',', b':'];

/// A named slot in a template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Placeholder {
    /// Name without braces or format suffix.
    pub name: String,
    /// Ordinal among the template's placeholders.
    pub position: usize,
    /// Byte range of the braced text, braces included.
    pub range: Range<usize>,
    /// Format suffix including its delimiter (`":0"`, `",8"`), if any.
    pub format: Option<String>,
}

/// Result of scanning a template.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParsedTemplate {
    pub placeholders: Vec<Placeholder>,
    /// `false` when an opening brace was never closed. Scanning stopped
    /// there; the rest of the template is literal text.
    pub terminated: bool,
}

impl ParsedTemplate {
    /// Placeholder names in encounter order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.placeholders.iter().map(|p| p.name.as_str())
    }

    pub fn is_malformed(&self) -> bool {
        !self.terminated
    }
}

/// Parse a template into its placeholders, in encounter order.
pub fn parse(template: &str) -> Vec<Placeholder> {
    scan(template).placeholders
}

/// Parse a template, also reporting whether it ended inside a placeholder.
pub fn scan(template: &str) -> ParsedTemplate {
    let bytes = template.as_bytes();
    let end = bytes.len();
    let mut placeholders = Vec::new();
    let mut terminated = true;
    let mut scan_index = 0;

    while scan_index < end {
        let open = find_brace(bytes, b'{', scan_index, end);
        if open == end {
            break;
        }

        let close = find_brace(bytes, b'}', open + 1, end);
        if close == end {
            terminated = false;
            break;
        }

        let inner = open + 1..close;
        let delimiter = bytes[inner.clone()]
            .iter()
            .position(|b| FORMAT_DELIMITERS.contains(b))
            .map_or(close, |offset| inner.start + offset);

        // Every boundary sits on an ASCII byte, so slicing is char-safe.
        placeholders.push(Placeholder {
            name: template[inner.start..delimiter].to_string(),
            position: placeholders.len(),
            range: open..close + 1,
            format: (delimiter < close).then(|| template[delimiter..close].to_string()),
        });

        scan_index = close + 1;
    }

    ParsedTemplate {
        placeholders,
        terminated,
    }
}

/// Find the next unescaped `brace` in `bytes[start..end]`, or `end`.
///
/// Example: in `{{prefix{{{Argument}}}suffix}}` the opening brace is the
/// third `{` of the triple run and the closing brace is the first `}` of the
/// triple run.
fn find_brace(bytes: &[u8], brace: u8, start: usize, end: usize) -> usize {
    let mut brace_index = end;
    let mut run = 0usize;

    for (index, &byte) in bytes.iter().enumerate().take(end).skip(start) {
        if run > 0 && byte != brace {
            if run % 2 == 0 {
                // Escaped run; keep looking.
                run = 0;
                brace_index = end;
            } else {
                break;
            }
        } else if byte == brace {
            if brace == b'{' || run == 0 {
                brace_index = index;
            }
            run += 1;
        }
    }

    brace_index
}
