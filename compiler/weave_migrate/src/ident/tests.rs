use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_derive_simple() {
    assert_eq!(derive_identifier("Hello"), "Hello");
    assert_eq!(derive_identifier("hello world"), "HelloWorld");
    assert_eq!(derive_identifier("Hello {arg1}"), "HelloArg1");
}

#[test]
fn test_derive_from_malformed_template() {
    assert_eq!(derive_identifier("Hello {arg1:0"), "HelloArg10");
}

#[test]
fn test_leading_digits_are_dropped() {
    assert_eq!(derive_identifier("42 items left"), "ItemsLeft");
    assert_eq!(derive_identifier("v2 ready"), "V2Ready");
}

#[test]
fn test_dropped_leading_digit_keeps_word_boundary() {
    assert_eq!(derive_identifier("42items left"), "ItemsLeft");
    assert_eq!(derive_identifier("3rd try"), "RdTry");
}

#[test]
fn test_digits_do_not_start_a_new_word() {
    assert_eq!(derive_identifier("a1b"), "A1b");
}

#[test]
fn test_special_characters_collapse() {
    assert_eq!(derive_identifier("--user_id=={id}!!"), "UserIdId");
}

#[test]
fn test_no_letters_falls_back() {
    assert_eq!(derive_identifier(""), FALLBACK_IDENTIFIER);
    assert_eq!(derive_identifier("{0} {1}"), FALLBACK_IDENTIFIER);
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("count"));
    assert!(is_identifier("_x1"));
    assert!(!is_identifier("0"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("a b"));
}

#[test]
fn test_parameter_names_from_placeholders() {
    assert_eq!(parameter_names(&["user", "count"], 2, '_'), vec!["user", "count"]);
}

#[test]
fn test_parameter_names_fall_back_to_positional() {
    let names = parameter_names(&["0", "user", "user", "_hidden", "logger"], 6, '_');
    assert_eq!(names, vec!["arg0", "user", "arg2", "arg3", "arg4", "arg5"]);
}

#[test]
fn test_positional_name_avoids_placeholder_collision() {
    let names = parameter_names(&["arg1", "x"], 2, '_');
    assert_eq!(names, vec!["arg1", "x"]);

    let names = parameter_names(&["arg1", "0"], 2, '_');
    assert_eq!(names, vec!["arg1", "arg1_2"]);
}
