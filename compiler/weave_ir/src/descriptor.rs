//! Validated call descriptors and the emission strategy chosen for them.

use smallvec::SmallVec;

use crate::{LogLevel, Span, TypeRef};

/// Role a parameter plays in the generated call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamRole {
    LoggerHandle,
    Exception,
    SeverityLevel,
    Regular,
}

/// A parameter after classification.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub role: ParamRole,
    pub span: Span,
}

impl ParameterDescriptor {
    pub fn is_regular(&self) -> bool {
        self.role == ParamRole::Regular
    }
}

/// Where a call's severity comes from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeveritySource {
    /// Compile-time constant.
    Constant(LogLevel),
    /// Read from the named parameter at each call.
    Parameter(String),
}

impl SeveritySource {
    pub fn constant(&self) -> Option<LogLevel> {
        match self {
            SeveritySource::Constant(level) => Some(*level),
            SeveritySource::Parameter(_) => None,
        }
    }
}

/// The validated description of one intended log statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallDescriptor {
    pub target_name: String,
    /// Raw template text, kept verbatim even when it fails to parse.
    pub template: String,
    /// Placeholder names in encounter order.
    pub placeholders: Vec<String>,
    pub severity: SeveritySource,
    pub event_id: i32,
    pub event_name: String,
    pub skip_enabled_check: bool,
    pub parameters: Vec<ParameterDescriptor>,
    pub span: Span,
}

impl CallDescriptor {
    /// Parameters that correspond to template placeholders.
    pub fn regular_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.is_regular())
    }

    pub fn regular_count(&self) -> usize {
        self.regular_parameters().count()
    }

    /// The exception parameter, if one was classified.
    pub fn exception(&self) -> Option<&ParameterDescriptor> {
        self.parameters
            .iter()
            .find(|p| p.role == ParamRole::Exception)
    }
}

/// How the payload for a call is produced.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmissionStrategy {
    /// Bind a pre-built ordered-argument formatter once; pass the arguments
    /// as a tuple of these types.
    FixedArityFastPath(SmallVec<[TypeRef; 6]>),
    /// Build a structured field list per call.
    GenericFallback,
}

impl EmissionStrategy {
    pub fn is_fast_path(&self) -> bool {
        matches!(self, EmissionStrategy::FixedArityFastPath(_))
    }
}
