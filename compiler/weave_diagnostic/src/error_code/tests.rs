use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::W2009.as_str(), "W2009");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let families = [
            code.is_declaration_error(),
            code.is_warning(),
            code.is_internal_error(),
        ];
        assert_eq!(
            families.iter().filter(|&&hit| hit).count(),
            1,
            "{code} must belong to exactly one family"
        );
    }
}

#[test]
fn test_warning_prefix_matches_family() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().starts_with('W'), code.is_warning(), "{code}");
    }
}

#[test]
fn test_from_str_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("w2001".parse::<ErrorCode>(), Ok(ErrorCode::W2001));
    assert!("E0000".parse::<ErrorCode>().is_err());
}

#[test]
fn test_family_follows_prefix() {
    assert_eq!(ErrorCode::E1010.family(), CodeFamily::Declaration);
    assert_eq!(ErrorCode::W2007.family(), CodeFamily::Template);
    assert_eq!(ErrorCode::E9002.family(), CodeFamily::Internal);
}

#[test]
fn test_all_is_sorted() {
    assert!(ErrorCode::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ErrorCode::ALL.len(), 21);
}
