//! Sink contract and the two emission paths generated code calls into.
//!
//! Both paths ask the sink [`LogSink::is_enabled`] first (unless the call
//! opted out) and only then build the payload. A disabled level therefore
//! costs one check and no allocation.

use std::error::Error;
use std::fmt;

use weave_ir::LogLevel;

use crate::{FormatError, FormatterCell, StructuredFieldList};

/// Numeric id plus name of one logging event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventId<'a> {
    pub id: i32,
    pub name: &'a str,
}

impl<'a> EventId<'a> {
    pub const fn new(id: i32, name: &'a str) -> Self {
        EventId { id, name }
    }
}

/// What a call hands to the sink.
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    /// Generic fallback: named fields.
    Fields(&'a StructuredFieldList),
    /// Fast path: the arguments in template order.
    Args(&'a [&'a dyn fmt::Display]),
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Payload::Args(args) => f.debug_tuple("Args").field(&args.len()).finish(),
        }
    }
}

/// One log event as seen by a sink.
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub event: EventId<'a>,
    pub payload: Payload<'a>,
    pub exception: Option<&'a (dyn Error + 'static)>,
    /// Renders the final message on demand.
    message: &'a dyn Fn() -> String,
}

impl LogRecord<'_> {
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("event", &self.event)
            .field("payload", &self.payload)
            .field("exception", &self.exception.map(ToString::to_string))
            .finish_non_exhaustive()
    }
}

pub trait LogSink {
    fn is_enabled(&self, level: LogLevel) -> bool;

    fn log(&self, record: &LogRecord<'_>);
}

/// Options shared by both emission paths.
#[derive(Copy, Clone, Debug)]
pub struct Emit<'a> {
    pub level: LogLevel,
    pub event: EventId<'a>,
    pub exception: Option<&'a (dyn Error + 'static)>,
    /// Log without asking `is_enabled` first.
    pub skip_enabled_check: bool,
}

impl<'a> Emit<'a> {
    pub fn new(level: LogLevel, event: EventId<'a>) -> Self {
        Emit {
            level,
            event,
            exception: None,
            skip_enabled_check: false,
        }
    }

    #[must_use]
    pub fn with_exception(mut self, exception: &'a (dyn Error + 'static)) -> Self {
        self.exception = Some(exception);
        self
    }

    #[must_use]
    pub fn skip_enabled_check(mut self) -> Self {
        self.skip_enabled_check = true;
        self
    }

    fn enabled(&self, sink: &dyn LogSink) -> bool {
        // `None` is never logged.
        self.level != LogLevel::None && (self.skip_enabled_check || sink.is_enabled(self.level))
    }
}

/// Generic fallback. `build` runs only when the event will be logged.
/// Returns whether the sink was called.
pub fn emit_generic<F>(sink: &dyn LogSink, emit: Emit<'_>, build: F) -> Result<bool, FormatError>
where
    F: FnOnce() -> Result<StructuredFieldList, FormatError>,
{
    if !emit.enabled(sink) {
        return Ok(false);
    }
    let fields = build()?;
    let message = || fields.format();
    sink.log(&LogRecord {
        level: emit.level,
        event: emit.event,
        payload: Payload::Fields(&fields),
        exception: emit.exception,
        message: &message,
    });
    Ok(true)
}

/// Fixed-arity fast path. The formatter is built on the first enabled call.
/// Returns whether the sink was called.
pub fn emit_fast(
    sink: &dyn LogSink,
    emit: Emit<'_>,
    formatter: &FormatterCell,
    args: &[&dyn fmt::Display],
) -> Result<bool, FormatError> {
    if !emit.enabled(sink) {
        return Ok(false);
    }
    let formatter = formatter.get()?;
    if args.len() != formatter.arity() {
        return Err(FormatError::ValueCountMismatch {
            expected: formatter.arity(),
            actual: args.len(),
        });
    }
    // Arity was just checked, so formatting cannot fail.
    let message = || formatter.format(args).unwrap_or_default();
    sink.log(&LogRecord {
        level: emit.level,
        event: emit.event,
        payload: Payload::Args(args),
        exception: emit.exception,
        message: &message,
    });
    Ok(true)
}
