//! Lowering declarations to emission plans.
//!
//! Runs the generator pipeline for one method (classify, validate, select,
//! synthesize) and for a whole container, where event-id collisions
//! between methods are detected.

use rustc_hash::FxHashMap;
use weave_diagnostic::{Diagnostic, ErrorCode};
use weave_ir::{
    CallDescriptor, EmissionStrategy, FieldListShape, MethodDecl, MethodSignature, ParamRole,
    SeveritySource, TargetContainer, TypeOracle,
};
use weave_template::MessageTemplate;

use crate::{classify, select, synthesize, validate, Classification, GenOptions};

/// Everything the rendering back end needs for one method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LoweredMethod {
    pub descriptor: CallDescriptor,
    pub strategy: EmissionStrategy,
    /// Present exactly when `strategy` is the generic fallback.
    pub fields: Option<FieldListShape>,
}

/// Result of lowering one declaration.
#[derive(Clone, Debug, Default)]
pub struct MethodOutput {
    /// `None` when a fatal diagnostic dropped the method.
    pub lowered: Option<LoweredMethod>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of lowering every declaration of one container.
#[derive(Clone, Debug, Default)]
pub struct ContainerOutput {
    /// The container's method table, holding only the methods that lowered.
    pub container: TargetContainer,
    pub methods: Vec<LoweredMethod>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ContainerOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lower a single declaration.
pub fn lower_method(decl: &MethodDecl, oracle: &dyn TypeOracle, options: &GenOptions) -> MethodOutput {
    let template = MessageTemplate::new(decl.attribute.message.clone());
    let classified = classify(&decl.parameters, oracle, decl.attribute.level);
    let validation = validate(decl, &template, &classified.parameters, oracle, options);

    let severity_param = classified.find(ParamRole::SeverityLevel).map(|p| p.name.clone());
    let Classification {
        parameters,
        mut diagnostics,
    } = classified;
    diagnostics.extend(validation.diagnostics);

    if !validation.usable {
        tracing::debug!(method = %decl.name, "dropped by fatal diagnostics");
        return MethodOutput {
            lowered: None,
            diagnostics,
        };
    }

    let severity = match (decl.attribute.level, severity_param) {
        (Some(level), _) => SeveritySource::Constant(level),
        (None, Some(name)) => SeveritySource::Parameter(name),
        // Validation rejects this combination with E1010.
        (None, None) => {
            diagnostics.push(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("`{}` passed validation without a severity", decl.name))
                    .with_label(decl.span, "method dropped here"),
            );
            return MethodOutput {
                lowered: None,
                diagnostics,
            }
        }
    };

    let descriptor = CallDescriptor {
        target_name: decl.name.clone(),
        template: template.text().to_string(),
        placeholders: template.names().map(str::to_string).collect(),
        severity,
        event_id: decl.attribute.event_id,
        event_name: decl.event_name().to_string(),
        skip_enabled_check: decl.attribute.skip_enabled_check,
        parameters,
        span: decl.span,
    };

    let strategy = select(&descriptor, options);
    let fields = match strategy {
        EmissionStrategy::GenericFallback => Some(synthesize(&descriptor, oracle)),
        EmissionStrategy::FixedArityFastPath(_) => None,
    };
    tracing::debug!(
        method = %decl.name,
        fast_path = strategy.is_fast_path(),
        "lowered method"
    );

    MethodOutput {
        lowered: Some(LoweredMethod {
            descriptor,
            strategy,
            fields,
        }),
        diagnostics,
    }
}

/// Lower every declaration of a container.
///
/// A fatal diagnostic drops only the method it belongs to. Methods sharing
/// an event id are all kept; every one after the first draws a warning.
#[tracing::instrument(level = "debug", skip_all, fields(container = name, methods = decls.len()))]
pub fn lower_container(
    name: &str,
    decls: &[MethodDecl],
    oracle: &dyn TypeOracle,
    options: &GenOptions,
) -> ContainerOutput {
    let mut out = ContainerOutput {
        container: TargetContainer::new(name),
        ..ContainerOutput::default()
    };
    let mut first_owner: FxHashMap<i32, &MethodDecl> = FxHashMap::default();

    for decl in decls {
        let method = lower_method(decl, oracle, options);
        out.diagnostics.extend(method.diagnostics);

        match first_owner.get(&decl.attribute.event_id) {
            Some(first) => out.diagnostics.push(
                Diagnostic::warning(ErrorCode::W2009)
                    .with_message(format!(
                        "event id {} of `{}` is already used by `{}`",
                        decl.attribute.event_id, decl.name, first.name
                    ))
                    .with_label(decl.span, "duplicate event id")
                    .with_secondary_label(first.span, "first used here"),
            ),
            None => {
                first_owner.insert(decl.attribute.event_id, decl);
            }
        }

        if let Some(lowered) = method.lowered {
            out.container.push(MethodSignature::from_decl(decl));
            out.methods.push(lowered);
        }
    }

    tracing::debug!(
        lowered = out.methods.len(),
        diagnostics = out.diagnostics.len(),
        "container lowered"
    );
    out
}
