//! Field values and their textual forms.

use std::fmt;
use std::sync::OnceLock;

/// Text used for absent values.
pub const NULL_TEXT: &str = "(null)";

/// A value stored in a structured field list.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(LazySequence),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str(NULL_TEXT),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Seq(seq) => f.write_str(seq.text()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(i64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// An optional sequence rendered as `[e0, e1, ...]` on first request.
///
/// The text is computed at most once and only if someone asks for it, so
/// a sink that never formats the message never pays for the rendering.
#[derive(Clone, Debug, Default)]
pub struct LazySequence {
    items: Option<Vec<FieldValue>>,
    text: OnceLock<String>,
}

impl LazySequence {
    pub fn new(items: Vec<FieldValue>) -> Self {
        LazySequence {
            items: Some(items),
            text: OnceLock::new(),
        }
    }

    /// An absent sequence; renders as `(null)`.
    pub fn null() -> Self {
        LazySequence::default()
    }

    pub fn items(&self) -> Option<&[FieldValue]> {
        self.items.as_deref()
    }

    /// Whether the text has been computed yet.
    pub fn is_rendered(&self) -> bool {
        self.text.get().is_some()
    }

    pub fn text(&self) -> &str {
        self.text.get_or_init(|| match &self.items {
            None => NULL_TEXT.to_string(),
            Some(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                format!("[{}]", parts.join(", "))
            }
        })
    }
}

impl PartialEq for LazySequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Into<FieldValue>> FromIterator<T> for LazySequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazySequence::new(iter.into_iter().map(Into::into).collect())
    }
}
