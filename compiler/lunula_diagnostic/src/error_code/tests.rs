use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
    assert_eq!(ErrorCode::W0001.to_string(), "W0001");
}

#[test]
fn test_phase_ranges() {
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(!ErrorCode::E0003.is_parser_error());

    assert!(ErrorCode::E1003.is_parser_error());
    assert!(!ErrorCode::E1003.is_runtime_error());

    assert!(ErrorCode::E2005.is_runtime_error());
    assert!(!ErrorCode::E2005.is_fatal());

    assert!(ErrorCode::E9002.is_fatal());
    assert!(ErrorCode::E9004.is_fatal());
    assert!(!ErrorCode::E9002.is_warning());

    assert!(ErrorCode::W0001.is_warning());
    assert!(!ErrorCode::W0001.is_fatal());
}

#[test]
fn test_descriptions_are_lowercase_phrases() {
    for code in [
        ErrorCode::E0001,
        ErrorCode::E1002,
        ErrorCode::E2002,
        ErrorCode::E9001,
        ErrorCode::W0001,
    ] {
        let text = code.description();
        assert!(!text.is_empty());
        assert!(text.chars().next().is_some_and(char::is_lowercase));
    }
}
