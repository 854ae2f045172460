//! Runtime support for code emitted by the weave logging-call compiler.
//!
//! Generated methods call [`emit_fast`] with a per-call-site
//! [`FormatterCell`] when their arguments line up with the template, and
//! [`emit_generic`] with a [`StructuredFieldList`] otherwise. Both consult
//! the sink's enabled check before any payload is built.

mod error;
mod fields;
mod formatter;
mod render;
mod sink;
mod value;

pub use error::FormatError;
pub use fields::{Field, StructuredFieldList};
pub use formatter::{FixedFormatter, FormatterCell, MAX_FAST_ARITY};
pub use sink::{emit_fast, emit_generic, Emit, EventId, LogRecord, LogSink, Payload};
pub use value::{FieldValue, LazySequence, NULL_TEXT};
pub use weave_ir::{FieldIndexError, LogLevel};
