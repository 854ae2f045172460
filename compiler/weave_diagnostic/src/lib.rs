//! Diagnostics for the weave logging-call compiler.
//!
//! A [`Diagnostic`] names an [`ErrorCode`], says what is wrong, and points
//! at host source through labeled spans. Its code's [`CodeFamily`] decides
//! the outcome: declaration errors (`E1xxx`) drop the method, template and
//! parameter warnings (`W2xxx`) are reported while generation continues.
//!
//! Nothing here is thrown. Phases return diagnostics next to their results
//! and a [`DiagnosticQueue`] gathers them per batch. Code that must not go
//! on after an error can demand an [`ErrorGuaranteed`], which only the
//! queue hands out:
//!
//! ```text
//! let proof: ErrorGuaranteed = queue.emit_error(diagnostic);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity, Substitution};
pub use error_code::{CodeFamily, ErrorCode};
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
