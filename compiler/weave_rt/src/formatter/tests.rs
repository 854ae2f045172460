use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_positional_fill() {
    let f = FixedFormatter::new("Copy {source} to {target}", 2).expect("formatter");
    assert_eq!(f.format(&[&"a.txt", &"b.txt"]), Ok("Copy a.txt to b.txt".to_string()));
}

#[test]
fn test_zero_arity() {
    let f = FixedFormatter::new("Started {{now}}", 0).expect("formatter");
    assert_eq!(f.format(&[]), Ok("Started {now}".to_string()));
}

#[test]
fn test_alignment_and_format_suffix() {
    let f = FixedFormatter::new("[{a,4}] {b:x}", 2).expect("formatter");
    assert_eq!(f.format(&[&1, &255]), Ok("[   1] 255".to_string()));
}

#[test]
fn test_arity_bound() {
    let template = "{a}{b}{c}{d}{e}{f}{g}";
    assert_eq!(
        FixedFormatter::new(template, 7),
        Err(FormatError::ArityTooLarge { arity: 7, max: 6 })
    );
    assert!(FixedFormatter::new("{a}{b}{c}{d}{e}{f}", 6).is_ok());
}

#[test]
fn test_placeholder_count_must_match() {
    assert_eq!(
        FixedFormatter::new("{a} {a}", 1),
        Err(FormatError::PlaceholderMismatch {
            placeholders: 2,
            arity: 1,
        })
    );
}

#[test]
fn test_argument_count_must_match() {
    let f = FixedFormatter::new("{a}", 1).expect("formatter");
    assert_eq!(
        f.format(&[]),
        Err(FormatError::ValueCountMismatch {
            expected: 1,
            actual: 0,
        })
    );
}

#[test]
fn test_cell_builds_once() {
    static CELL: FormatterCell = FormatterCell::new("Hello {arg1}", 1);
    assert!(!CELL.is_initialized());
    let first = CELL.get().expect("formatter") as *const FixedFormatter;
    let second = CELL.get().expect("formatter") as *const FixedFormatter;
    assert!(CELL.is_initialized());
    assert_eq!(first, second);
}

#[test]
fn test_cell_reports_build_error_every_time() {
    static BAD: FormatterCell = FormatterCell::new("{a}", 2);
    let expected = FormatError::PlaceholderMismatch {
        placeholders: 1,
        arity: 2,
    };
    assert_eq!(BAD.get().err(), Some(expected.clone()));
    assert_eq!(BAD.get().err(), Some(expected));
}
