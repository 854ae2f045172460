//! Legacy logging calls.
//!
//! A legacy call is an ad-hoc `logger.LogX(...)` or `logger.Log(level, ...)`
//! invocation that formats its template at every call. Argument layout:
//!
//! ```text
//! Log(level, [eventId], [exception], message, args...)
//! LogDebug([eventId], [exception], message, args...)
//! ```
//!
//! [`analyze`] maps each argument to its role; the resulting
//! [`LegacyAnalysis`] drives both the generated declaration and the
//! rewritten call.

use weave_ir::{LogLevel, Span, TypeRef, WellKnownType};

use crate::{MigrationError, SemanticModel};

/// Name of the level-taking legacy method.
pub const LOG_METHOD: &str = "Log";

/// A compile-time constant value of an argument expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgConstant {
    Str(String),
    Level(LogLevel),
}

/// One argument expression, as the front end saw it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallArgument {
    /// Source text, reused verbatim in the rewritten call.
    pub text: String,
    pub ty: Option<TypeRef>,
    pub constant: Option<ArgConstant>,
    pub span: Span,
}

impl CallArgument {
    pub fn new(text: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        CallArgument {
            text: text.into(),
            ty: Some(ty.into()),
            constant: None,
            span: Span::DUMMY,
        }
    }

    /// A string literal argument.
    pub fn string(value: &str) -> Self {
        CallArgument {
            text: format!("{value:?}"),
            ty: Some(TypeRef::new("string")),
            constant: Some(ArgConstant::Str(value.to_string())),
            span: Span::DUMMY,
        }
    }

    /// A constant level such as `LogLevel.Warning`.
    pub fn level(level: LogLevel) -> Self {
        CallArgument {
            text: format!("LogLevel.{level}"),
            ty: Some(TypeRef::new("LogLevel")),
            constant: Some(ArgConstant::Level(level)),
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: ArgConstant) -> Self {
        self.constant = Some(constant);
        self
    }

    fn as_str_constant(&self) -> Option<&str> {
        match &self.constant {
            Some(ArgConstant::Str(s)) => Some(s),
            _ => None,
        }
    }
}

/// A legacy logging call site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LegacyCall {
    /// `LogDebug`, `Log`, ...
    pub method: String,
    /// The logger expression the method is invoked on.
    pub receiver: CallArgument,
    pub arguments: Vec<CallArgument>,
    /// The whole invocation expression.
    pub span: Span,
}

impl LegacyCall {
    pub fn new(method: impl Into<String>, receiver: CallArgument, arguments: Vec<CallArgument>) -> Self {
        LegacyCall {
            method: method.into(),
            receiver,
            arguments,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Where the level of a legacy call comes from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LevelArg {
    /// Fixed by the method name or a constant first argument.
    Constant(LogLevel),
    /// Computed at run time by the argument at this index.
    Argument(usize),
}

/// Argument roles of a legacy call. Indices point into `call.arguments`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LegacyAnalysis {
    pub level: LevelArg,
    pub event_id: Option<usize>,
    pub exception: Option<usize>,
    pub template: String,
    pub template_index: usize,
}

impl LegacyAnalysis {
    pub fn constant_level(&self) -> Option<LogLevel> {
        match self.level {
            LevelArg::Constant(level) => Some(level),
            LevelArg::Argument(_) => None,
        }
    }

    /// Indices of the template arguments, in call order.
    pub fn format_arguments(&self, call: &LegacyCall) -> std::ops::Range<usize> {
        self.template_index + 1..call.arguments.len()
    }

    /// Indices of the arguments the rewritten call keeps, in call order:
    /// a dynamic level, the exception, then the template arguments.
    pub fn kept_arguments(&self, call: &LegacyCall) -> Vec<usize> {
        let mut kept = Vec::with_capacity(call.arguments.len());
        if let LevelArg::Argument(index) = self.level {
            kept.push(index);
        }
        kept.extend(self.exception);
        kept.extend(self.format_arguments(call));
        kept
    }
}

/// Work out which argument of `call` plays which role.
pub fn analyze(call: &LegacyCall, model: &dyn SemanticModel) -> Result<LegacyAnalysis, MigrationError> {
    let (level, mut next) = if call.method == LOG_METHOD {
        let first = call
            .arguments
            .first()
            .ok_or(MigrationError::MissingArgument("level"))?;
        match first.constant {
            Some(ArgConstant::Level(level)) => (LevelArg::Constant(level), 1),
            _ if is_a(first, WellKnownType::LogLevel, model)? => (LevelArg::Argument(0), 1),
            _ => return Err(MigrationError::NotALoggingCall(call.method.clone())),
        }
    } else {
        let level = LogLevel::from_legacy_method(&call.method)
            .ok_or_else(|| MigrationError::NotALoggingCall(call.method.clone()))?;
        (LevelArg::Constant(level), 0)
    };

    let mut optional = |known: WellKnownType| -> Result<Option<usize>, MigrationError> {
        match call.arguments.get(next) {
            Some(arg) if is_a(arg, known, model)? => {
                next += 1;
                Ok(Some(next - 1))
            }
            _ => Ok(None),
        }
    };
    let event_id = optional(WellKnownType::EventId)?;
    let exception = optional(WellKnownType::Exception)?;

    let message = call
        .arguments
        .get(next)
        .ok_or(MigrationError::MissingArgument("message"))?;
    let template = message
        .as_str_constant()
        .ok_or(MigrationError::NonConstantTemplate)?
        .to_string();

    Ok(LegacyAnalysis {
        level,
        event_id,
        exception,
        template,
        template_index: next,
    })
}

/// Whether `arg` has a type compatible with `known`. String constants are
/// never treated as anything but the message.
fn is_a(arg: &CallArgument, known: WellKnownType, model: &dyn SemanticModel) -> Result<bool, MigrationError> {
    if arg.as_str_constant().is_some() {
        return Ok(false);
    }
    let ty = model
        .type_of(arg)
        .ok_or_else(|| MigrationError::TypeUnavailable(format!("argument `{}`", arg.text)))?;
    Ok(model.oracle().is_assignable(&ty, known))
}
