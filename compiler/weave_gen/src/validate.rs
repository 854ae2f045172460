//! Descriptor validation.
//!
//! Cross-checks a declaration's shape, its classified parameters and its
//! template placeholders. Every check runs independently, so one method can
//! collect several diagnostics. Any error-severity diagnostic makes the
//! method unusable; warnings never do.

use rustc_hash::FxHashSet;
use weave_diagnostic::{Diagnostic, ErrorCode};
use weave_ir::{
    MethodDecl, MethodModifiers, ParamModifier, ParamRole, ParameterDescriptor, ReturnType, Span,
    TypeOracle, WellKnownType,
};
use weave_template::MessageTemplate;

use crate::GenOptions;

/// Severity words that should not be repeated at the start of a message.
const REDUNDANT_QUALIFIERS: &[&str] = &[
    "TRACE:",
    "DEBUG:",
    "INFORMATION:",
    "INFO:",
    "WARNING:",
    "WARN:",
    "ERROR:",
    "ERR:",
    "CRITICAL:",
];

/// Outcome of validating one declaration.
#[derive(Clone, Debug, Default)]
pub struct Validation {
    pub diagnostics: Vec<Diagnostic>,
    /// `false` when any diagnostic is an error; the method is then dropped.
    pub usable: bool,
}

/// Validate a declaration against its classified parameters and template.
#[tracing::instrument(level = "trace", skip_all, fields(method = %decl.name))]
pub fn validate(
    decl: &MethodDecl,
    template: &MessageTemplate,
    params: &[ParameterDescriptor],
    oracle: &dyn TypeOracle,
    options: &GenOptions,
) -> Validation {
    let mut diags = Vec::new();

    check_declaration(decl, options, &mut diags);
    check_parameters(decl, params, oracle, options, &mut diags);
    check_severity(decl, params, &mut diags);
    check_template(decl, template, params, &mut diags);

    let usable = !diags.iter().any(Diagnostic::is_error);
    Validation {
        diagnostics: diags,
        usable,
    }
}

fn check_declaration(decl: &MethodDecl, options: &GenOptions, diags: &mut Vec<Diagnostic>) {
    if options.is_reserved(&decl.name) {
        diags.push(
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!(
                    "logging method name `{}` starts with the reserved prefix `{}`",
                    decl.name, options.reserved_prefix
                ))
                .with_label(decl.span, "collides with compiler-synthesized members"),
        );
    }

    if let ReturnType::Type(ty) = &decl.return_type {
        diags.push(
            Diagnostic::error(ErrorCode::E1003)
                .with_message(format!("logging method `{}` must return void", decl.name))
                .with_label(decl.span, format!("returns `{ty}`")),
        );
    }

    if !decl.modifiers.contains(MethodModifiers::STATIC) {
        diags.push(
            Diagnostic::error(ErrorCode::E1004)
                .with_message(format!("logging method `{}` must be static", decl.name))
                .with_label(decl.span, "instance method"),
        );
    }

    if !decl.modifiers.contains(MethodModifiers::PARTIAL) {
        diags.push(
            Diagnostic::error(ErrorCode::E1005)
                .with_message(format!("logging method `{}` must be partial", decl.name))
                .with_label(decl.span, "the compiler supplies the body of partial stubs"),
        );
    }

    if decl.has_body {
        diags.push(
            Diagnostic::error(ErrorCode::E1006)
                .with_message(format!("logging method `{}` cannot have a body", decl.name))
                .with_label(decl.span, "body declared here"),
        );
    }

    if decl.generic_arity > 0 {
        diags.push(
            Diagnostic::error(ErrorCode::E1007)
                .with_message(format!("logging method `{}` cannot be generic", decl.name))
                .with_label(
                    decl.span,
                    format!("declares {} type parameter(s)", decl.generic_arity),
                ),
        );
    }
}

fn check_parameters(
    decl: &MethodDecl,
    params: &[ParameterDescriptor],
    oracle: &dyn TypeOracle,
    options: &GenOptions,
    diags: &mut Vec<Diagnostic>,
) {
    match params.first() {
        Some(logger) if oracle.is_assignable(&logger.ty, WellKnownType::Logger) => {}
        Some(first) => diags.push(
            Diagnostic::error(ErrorCode::E1008)
                .with_message(format!(
                    "first parameter of `{}` must be a logger, found `{}`",
                    decl.name, first.ty
                ))
                .with_label(first.span, "expected a logger here"),
        ),
        None => diags.push(
            Diagnostic::error(ErrorCode::E1008)
                .with_message(format!("logging method `{}` has no logger parameter", decl.name))
                .with_label(decl.span, "add a logger as the first parameter"),
        ),
    }

    for (param, raw) in params.iter().zip(&decl.parameters) {
        if options.is_reserved(&param.name) {
            diags.push(
                Diagnostic::error(ErrorCode::E1002)
                    .with_message(format!(
                        "parameter name `{}` starts with the reserved prefix `{}`",
                        param.name, options.reserved_prefix
                    ))
                    .with_label(param.span, "collides with compiler-synthesized members"),
            );
        }

        if raw.modifier != ParamModifier::Value {
            diags.push(
                Diagnostic::error(ErrorCode::E1009)
                    .with_message(format!(
                        "parameter `{}` cannot be declared `{}`",
                        param.name,
                        raw.modifier.keyword()
                    ))
                    .with_label(param.span, "logging arguments are passed by value"),
            );
        }
    }
}

fn check_severity(decl: &MethodDecl, params: &[ParameterDescriptor], diags: &mut Vec<Diagnostic>) {
    let has_level_param = params.iter().any(|p| p.role == ParamRole::SeverityLevel);
    if decl.attribute.level.is_none() && !has_level_param {
        diags.push(
            Diagnostic::error(ErrorCode::E1010)
                .with_message(format!("logging method `{}` has no severity", decl.name))
                .with_label(decl.span, "no constant level and no level parameter")
                .with_suggestion("give the attribute a level or add a level parameter"),
        );
    }
}

fn check_template(
    decl: &MethodDecl,
    template: &MessageTemplate,
    params: &[ParameterDescriptor],
    diags: &mut Vec<Diagnostic>,
) {
    let message_span = decl.attribute.message_span;
    let placeholder_names: FxHashSet<&str> = template.names().collect();

    if template.is_malformed() {
        diags.push(
            Diagnostic::warning(ErrorCode::W2007)
                .with_message("template has an unterminated placeholder")
                .with_label(message_span, "treated as literal text from here on")
                .with_suggestion("close the placeholder with `}` or escape the brace as `{{`"),
        );
    }

    let trimmed = template.text().trim_start();
    if let Some(word) = REDUNDANT_QUALIFIERS.iter().find(|word| {
        trimmed
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
    }) {
        diags.push(
            Diagnostic::warning(ErrorCode::W2006)
                .with_message(format!("template repeats the severity as `{word}`"))
                .with_label(message_span, "the sink already records the level"),
        );
    }

    for param in params {
        let named = placeholder_names.contains(param.name.as_str());
        let (code, what) = match param.role {
            ParamRole::Regular if !is_referenced(&placeholder_names, &param.name) => {
                diags.push(
                    Diagnostic::warning(ErrorCode::W2001)
                        .with_message(format!(
                            "argument `{}` has no corresponding template placeholder",
                            param.name
                        ))
                        .with_label(param.span, "not referenced by the template"),
                );
                continue;
            }
            ParamRole::Exception if named => (ErrorCode::W2003, "exception"),
            ParamRole::SeverityLevel if named => (ErrorCode::W2004, "level"),
            ParamRole::LoggerHandle if named => (ErrorCode::W2005, "logger"),
            _ => continue,
        };
        diags.push(
            Diagnostic::warning(code)
                .with_message(format!(
                    "{what} parameter `{}` should not be mentioned in the template",
                    param.name
                ))
                .with_label(param.span, format!("the sink records the {what} separately")),
        );
    }

    let known: FxHashSet<&str> = params.iter().map(|p| p.name.as_str()).collect();
    let mut reported = FxHashSet::default();
    for placeholder in template.placeholders() {
        let name = placeholder.name.as_str();
        if known.contains(name) || !reported.insert(name) {
            continue;
        }
        diags.push(
            Diagnostic::warning(ErrorCode::W2002)
                .with_message(format!("template references no such argument `{name}`"))
                .with_label(placeholder_span(message_span, placeholder), "unknown placeholder"),
        );
    }
}

/// Whether an argument is consumed by some placeholder. Field selection
/// pairs names ignoring ASCII case, so this check does too.
fn is_referenced(placeholder_names: &FxHashSet<&str>, name: &str) -> bool {
    placeholder_names.contains(name) || placeholder_names.iter().any(|p| p.eq_ignore_ascii_case(name))
}

fn placeholder_span(message_span: Span, placeholder: &weave_template::Placeholder) -> Span {
    message_span.sub(placeholder.range.clone())
}
