//! Collecting the diagnostics of a batch.
//!
//! Lowering runs per container and may run in parallel, so diagnostics
//! arrive in no particular order and the same problem can be reported
//! twice. The queue drops exact repeats, stops counting errors at a limit,
//! and hands everything back sorted by source position.

use rustc_hash::FxHashSet;
use weave_ir::Span;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// How a [`DiagnosticQueue`] filters what it is given.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors past this many are dropped and summarized by one `E9002`.
    /// Zero means no limit. Warnings are always kept.
    pub error_limit: usize,
    /// Drop a diagnostic equal to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything; useful in tests.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    config: DiagnosticConfig,
    queued: Vec<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
    errors: usize,
    /// An error was refused because of the limit.
    overflowed: bool,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue `diag`. Returns `false` when it was filtered out.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();
        if is_error && self.limit_reached() {
            self.overflowed = true;
            return false;
        }
        if self.config.deduplicate && self.seen.contains(&diag) {
            return false;
        }

        if self.config.deduplicate {
            self.seen.insert(diag.clone());
        }
        self.errors += usize::from(is_error);
        self.queued.push(diag);
        true
    }

    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.push(diag);
        }
    }

    /// Queue an error and get the proof that one was reported.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a warning");
        self.push(diag);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.errors >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.errors)
    }

    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.queued.iter()
    }

    /// Take every queued diagnostic, sorted by primary span.
    ///
    /// Unlabeled diagnostics come first and equal spans keep arrival order.
    /// If errors were dropped, an `E9002` summary goes last. The queue is
    /// empty and reusable afterwards.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.queued);
        out.sort_by_key(Diagnostic::primary_span);

        if std::mem::take(&mut self.overflowed) {
            let last = out.iter().filter_map(Diagnostic::primary_span).max();
            out.push(too_many_errors(self.config.error_limit, last.unwrap_or(Span::DUMMY)));
        }
        self.seen.clear();
        self.errors = 0;
        out
    }
}

/// The summary appended when the error limit cut a batch short.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("stopped reporting errors after {limit}"))
        .with_label(span, "limit reached here")
        .with_note("raise `error_limit` in `DiagnosticConfig` to see the rest")
}
