use super::*;
use crate::{LogAttribute, Parameter};

fn signature(name: &str, event_id: i32) -> MethodSignature {
    MethodSignature {
        name: name.to_string(),
        param_types: vec![TypeRef::new("ILogger")],
        level: Some(LogLevel::Debug),
        template: "Hello".to_string(),
        event_id,
    }
}

#[test]
fn test_next_event_id_empty_uses_base() {
    let container = TargetContainer::new("Log");
    assert_eq!(container.next_event_id(0), Some(0));
    assert_eq!(container.next_event_id(100), Some(100));
}

#[test]
fn test_next_event_id_is_max_plus_one() {
    let mut container = TargetContainer::new("Log");
    container.push(signature("A", 3));
    container.push(signature("B", 7));
    container.push(signature("C", 5));
    assert_eq!(container.next_event_id(0), Some(8));
    assert_eq!(container.next_event_id(1000), Some(1000));
}

#[test]
fn test_next_event_id_runs_out_at_max() {
    let mut container = TargetContainer::new("Log");
    container.push(signature("A", i32::MAX - 1));
    assert_eq!(container.next_event_id(0), Some(i32::MAX));

    container.push(signature("B", i32::MAX));
    assert_eq!(container.next_event_id(0), None);
    assert_eq!(container.next_event_id(i32::MAX), None);
}

#[test]
fn test_find_by_name_returns_overloads() {
    let mut container = TargetContainer::new("Log");
    container.push(signature("Hello", 0));
    container.push(signature("Other", 1));
    container.push(signature("Hello", 2));
    assert_eq!(container.find_by_name("Hello").count(), 2);
    assert_eq!(container.find_by_name("Missing").count(), 0);
}

#[test]
fn test_from_decl_records_all_parameter_types() {
    let decl = MethodDecl::stub(
        "Greet",
        LogAttribute::new(4, Some(LogLevel::Information), "Hi {name}"),
        vec![Parameter::new("logger", "ILogger"), Parameter::new("name", "string")],
    );
    let sig = MethodSignature::from_decl(&decl);

    assert_eq!(sig.param_types, vec![TypeRef::new("ILogger"), TypeRef::new("string")]);
    assert!(sig.same_shape(&sig.param_types, Some(LogLevel::Information), "Hi {name}"));
    assert!(!sig.same_shape(&sig.param_types, None, "Hi {name}"));
    assert_eq!(sig.event_id, 4);
}
