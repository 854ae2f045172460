//! What went wrong with a logging declaration, where, and how to fix it.
//!
//! Also home to [`Substitution`], the source edit a migration fix hands
//! back to the host.

use std::fmt;

use weave_ir::Span;

use crate::ErrorCode;

/// Whether a diagnostic stops generation of its method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The method is dropped.
    Error,
    /// Reported; generation continues.
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replacement text for one span of host source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    pub span: Span,
    pub snippet: String,
}

impl Substitution {
    pub fn new(span: Span, snippet: impl Into<String>) -> Self {
        Substitution {
            span,
            snippet: snippet.into(),
        }
    }
}

/// A span a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Primary labels mark the offending code; secondary ones give context
    /// (the first owner of a duplicated event id, for instance).
    pub is_primary: bool,
}

/// One reported problem with a declaration, its parameters or its template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// How to fix it, in words.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// An error. The method it is attached to will not be generated.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        debug_assert!(!code.is_warning(), "{code} is a warning code");
        Diagnostic::bare(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        debug_assert!(code.is_warning(), "{code} is an error code");
        Diagnostic::bare(code, Severity::Warning)
    }

    fn bare(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..self
        }
    }

    /// Point at the offending code.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), true)
    }

    /// Point at related code.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), false)
    }

    fn labeled(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first primary label. Queues sort by it.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .filter(|label| label.is_primary)
            .map(|label| label.span)
            .next()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Plain-text rendering:
///
/// ```text
/// warning[W2009]: event id 3 of `Stop` is already used by `Start`
///   at 120..160: duplicate event id
///   see 40..80: first used here
///   help: give each method its own event id
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let lead = if label.is_primary { "at" } else { "see" };
            let Span { start, end } = label.span;
            write!(f, "\n  {lead} {start}..{end}: {}", label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  help: {suggestion}")?;
        }
        Ok(())
    }
}
