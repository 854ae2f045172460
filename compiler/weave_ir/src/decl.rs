//! Logging-method declarations as handed over by the extraction front end.
//!
//! A [`MethodDecl`] is the raw, unvalidated shape of one annotated method:
//! everything the validator needs to decide whether code can be generated
//! for it. Nothing here has been checked yet.

use bitflags::bitflags;

use crate::{LogLevel, Span, TypeRef};

bitflags! {
    /// Declaration modifiers relevant to generation.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MethodModifiers: u8 {
        /// Callable without an instance.
        const STATIC = 1 << 0;
        /// Declared as a stub whose body the compiler supplies.
        const PARTIAL = 1 << 1;
    }
}

/// Declared return type of a logging method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReturnType {
    Void,
    Type(TypeRef),
}

/// How an argument is passed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamModifier {
    #[default]
    Value,
    Ref,
    Out,
    In,
    Params,
}

impl ParamModifier {
    /// Keyword spelling, for diagnostics.
    pub fn keyword(self) -> &'static str {
        match self {
            ParamModifier::Value => "",
            ParamModifier::Ref => "ref",
            ParamModifier::Out => "out",
            ParamModifier::In => "in",
            ParamModifier::Params => "params",
        }
    }
}

/// A declared parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub modifier: ParamModifier,
    pub span: Span,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Parameter {
            name: name.into(),
            ty: ty.into(),
            modifier: ParamModifier::Value,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: ParamModifier) -> Self {
        self.modifier = modifier;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// The logging attribute attached to a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogAttribute {
    pub event_id: i32,
    /// Constant severity. `None` means the level comes from a parameter.
    pub level: Option<LogLevel>,
    pub message: String,
    /// Defaults to the method name when absent.
    pub event_name: Option<String>,
    /// Emit the call without consulting `is_enabled` first.
    pub skip_enabled_check: bool,
    /// Location of the message literal.
    pub message_span: Span,
}

impl LogAttribute {
    pub fn new(event_id: i32, level: Option<LogLevel>, message: impl Into<String>) -> Self {
        LogAttribute {
            event_id,
            level,
            message: message.into(),
            event_name: None,
            skip_enabled_check: false,
            message_span: Span::DUMMY,
        }
    }
}

/// One annotated logging method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub name: String,
    pub modifiers: MethodModifiers,
    pub return_type: ReturnType,
    pub generic_arity: u32,
    /// The declaration already has a body, so nothing can be generated.
    pub has_body: bool,
    pub parameters: Vec<Parameter>,
    pub attribute: LogAttribute,
    pub span: Span,
}

impl MethodDecl {
    /// A well-formed `static partial void` stub with the given parameters.
    pub fn stub(name: impl Into<String>, attribute: LogAttribute, parameters: Vec<Parameter>) -> Self {
        MethodDecl {
            name: name.into(),
            modifiers: MethodModifiers::STATIC | MethodModifiers::PARTIAL,
            return_type: ReturnType::Void,
            generic_arity: 0,
            has_body: false,
            parameters,
            attribute,
            span: Span::DUMMY,
        }
    }

    /// Event name, defaulting to the method name.
    pub fn event_name(&self) -> &str {
        self.attribute.event_name.as_deref().unwrap_or(&self.name)
    }
}
