use super::*;
use pretty_assertions::assert_eq;
use weave_ir::{LogLevel, ParamRole, ParameterDescriptor, Span, TypeRef};

fn param(name: &str, ty: &str, role: ParamRole) -> ParameterDescriptor {
    ParameterDescriptor {
        name: name.to_string(),
        ty: TypeRef::new(ty),
        role,
        span: Span::DUMMY,
    }
}

fn descriptor(placeholders: &[&str], regular: &[&str]) -> CallDescriptor {
    let mut parameters = vec![param("logger", "ILogger", ParamRole::LoggerHandle)];
    parameters.extend(regular.iter().map(|name| param(name, "int", ParamRole::Regular)));
    CallDescriptor {
        target_name: "M".to_string(),
        template: String::new(),
        placeholders: placeholders.iter().map(|p| (*p).to_string()).collect(),
        severity: SeveritySource::Constant(LogLevel::Debug),
        event_id: 0,
        event_name: "M".to_string(),
        skip_enabled_check: false,
        parameters,
        span: Span::DUMMY,
    }
}

#[test]
fn test_matching_order_takes_fast_path() {
    let out = select(&descriptor(&["arg1"], &["arg1"]), &GenOptions::default());
    assert_eq!(
        out,
        EmissionStrategy::FixedArityFastPath(SmallVec::from_vec(vec![TypeRef::new("int")]))
    );
}

#[test]
fn test_no_regular_parameters_takes_fast_path() {
    let out = select(&descriptor(&[], &[]), &GenOptions::default());
    assert_eq!(out, EmissionStrategy::FixedArityFastPath(SmallVec::new()));
}

#[test]
fn test_case_insensitive_match() {
    let out = select(&descriptor(&["A1", "b2"], &["a1", "B2"]), &GenOptions::default());
    assert!(out.is_fast_path());
}

#[test]
fn test_arity_bound() {
    let six = ["a1", "a2", "a3", "a4", "a5", "a6"];
    assert!(select(&descriptor(&six, &six), &GenOptions::default()).is_fast_path());

    let seven = ["A1", "a2", "A3", "a4", "A5", "a6", "A7"];
    let params = ["a1", "a2", "a3", "a4", "a5", "a6", "a7"];
    assert_eq!(
        select(&descriptor(&seven, &params), &GenOptions::default()),
        EmissionStrategy::GenericFallback
    );
}

#[test]
fn test_reordered_repeated_or_missing_fall_back() {
    let options = GenOptions::default();
    for (placeholders, params) in [
        (&["b", "a"][..], &["a", "b"][..]),
        (&["a", "a"][..], &["a"][..]),
        (&["a"][..], &["a", "b"][..]),
        (&["a", "extra"][..], &["a"][..]),
    ] {
        assert_eq!(
            select(&descriptor(placeholders, params), &options),
            EmissionStrategy::GenericFallback,
            "placeholders {placeholders:?} params {params:?}"
        );
    }
}

#[test]
fn test_dynamic_severity_never_fast_path() {
    let mut desc = descriptor(&["a"], &["a"]);
    assert!(select(&desc, &GenOptions::default()).is_fast_path());

    desc.severity = SeveritySource::Parameter("level".to_string());
    desc.parameters.push(param("level", "LogLevel", ParamRole::SeverityLevel));
    assert_eq!(
        select(&desc, &GenOptions::default()),
        EmissionStrategy::GenericFallback
    );
}

#[test]
fn test_exception_does_not_count_toward_arity() {
    let mut desc = descriptor(&["a"], &["a"]);
    desc.parameters.insert(1, param("ex", "Exception", ParamRole::Exception));
    assert!(select(&desc, &GenOptions::default()).is_fast_path());
}

#[test]
fn test_selection_is_deterministic() {
    let desc = descriptor(&["x", "y"], &["x", "y"]);
    let options = GenOptions {
        fast_path_max_arity: 1,
        ..GenOptions::default()
    };
    assert_eq!(select(&desc, &options), select(&desc, &options));
    assert_eq!(select(&desc, &options), EmissionStrategy::GenericFallback);
}
