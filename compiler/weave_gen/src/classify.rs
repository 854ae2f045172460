//! Parameter classification.
//!
//! Assigns every declared parameter a [`ParamRole`]. Roles are decided in
//! declaration order with first-match-wins per category, so the result
//! depends only on the parameter list, the constant level, and the oracle.

use weave_diagnostic::{Diagnostic, ErrorCode};
use weave_ir::{
    LogLevel, ParamRole, Parameter, ParameterDescriptor, TypeOracle, WellKnownType,
};

/// Classified parameters plus the warnings classification raised.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub parameters: Vec<ParameterDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    pub fn find(&self, role: ParamRole) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.role == role)
    }

    pub fn regular(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.is_regular())
    }
}

/// Classify `params` in declaration order.
///
/// - The first parameter is the logger handle, whatever its type. Whether
///   it really is a logger is the validator's call.
/// - The first exception-compatible parameter is the exception.
/// - The first level-compatible parameter is the severity, but only when
///   no constant level was given.
/// - Everything else is regular. Regular timestamps draw a warning.
pub fn classify(
    params: &[Parameter],
    oracle: &dyn TypeOracle,
    constant_level: Option<LogLevel>,
) -> Classification {
    let mut out = Classification::default();
    let mut found_exception = false;
    let mut found_level = constant_level.is_some();

    for (index, param) in params.iter().enumerate() {
        let role = if index == 0 {
            ParamRole::LoggerHandle
        } else if !found_exception && oracle.is_assignable(&param.ty, WellKnownType::Exception) {
            found_exception = true;
            ParamRole::Exception
        } else if !found_level && oracle.is_assignable(&param.ty, WellKnownType::LogLevel) {
            found_level = true;
            ParamRole::SeverityLevel
        } else {
            ParamRole::Regular
        };

        if role == ParamRole::Regular && oracle.is_assignable(&param.ty, WellKnownType::Timestamp)
        {
            out.diagnostics.push(
                Diagnostic::warning(ErrorCode::W2008)
                    .with_message(format!(
                        "parameter `{}` of type `{}` renders differently per host culture",
                        param.name, param.ty
                    ))
                    .with_label(param.span, "timestamp parameter")
                    .with_suggestion("log a preformatted string or a numeric timestamp instead"),
            );
        }

        tracing::trace!(name = %param.name, ty = %param.ty, ?role, "classified parameter");
        out.parameters.push(ParameterDescriptor {
            name: param.name.clone(),
            ty: param.ty.clone(),
            role,
            span: param.span,
        });
    }

    out
}
