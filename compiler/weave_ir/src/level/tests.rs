use super::*;

#[test]
fn test_level_ordering() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Error < LogLevel::Critical);
    assert!(LogLevel::Critical < LogLevel::None);
}

#[test]
fn test_legacy_method_round_trip() {
    for level in LogLevel::ALL {
        match level.legacy_method() {
            Some(method) => assert_eq!(LogLevel::from_legacy_method(method), Some(*level)),
            None => assert_eq!(*level, LogLevel::None),
        }
    }
    assert_eq!(LogLevel::from_legacy_method("Log"), None);
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
    assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert!("verbose".parse::<LogLevel>().is_err());
}
