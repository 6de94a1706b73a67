use super::*;
use std::collections::HashSet;

#[test]
fn identifiers_are_unique() {
    let ids: HashSet<_> = DiagnosticCode::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(ids.len(), DiagnosticCode::ALL.len());
}

#[test]
fn first_digit_matches_category() {
    for code in DiagnosticCode::ALL {
        let id = code.as_str();
        assert_eq!(id.len(), 5);
        assert!(id.starts_with('E'));
        let expected = if code.is_lexical() {
            '0'
        } else if code.is_syntactic() {
            '1'
        } else {
            assert!(code.is_systemic(), "{code:?} has no category");
            '9'
        };
        assert_eq!(id.chars().nth(1), Some(expected), "{code:?}");
    }
}

#[test]
fn every_code_defaults_to_error() {
    for code in DiagnosticCode::ALL {
        assert_eq!(code.default_severity(), Severity::Error);
        assert!(!code.title().is_empty());
    }
}

#[test]
fn display_is_identifier() {
    assert_eq!(DiagnosticCode::MissingToken.to_string(), "E1002");
    assert_eq!(DiagnosticCode::TooManyErrors.to_string(), "E9001");
}
