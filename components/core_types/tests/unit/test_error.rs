//! Unit tests for Diagnostic, ErrorCode and Excerpt

use core_types::{Diagnostic, ErrorCode, Excerpt, Location};

#[cfg(test)]
mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_one_through_nine() {
        assert_eq!(ErrorCode::UnterminatedString.code(), 1);
        assert_eq!(ErrorCode::InvalidBinaryLiteral.code(), 2);
        assert_eq!(ErrorCode::UnexpectedCharacter.code(), 3);
        assert_eq!(ErrorCode::MisplacedToken.code(), 4);
        assert_eq!(ErrorCode::UnexpectedStatement.code(), 5);
        assert_eq!(ErrorCode::ExpectedToken.code(), 6);
        assert_eq!(ErrorCode::Unclosed.code(), 7);
        assert_eq!(ErrorCode::CaseOutsideSwitch.code(), 8);
        assert_eq!(ErrorCode::NonCaseInSwitch.code(), 9);
    }

    #[test]
    fn test_code_round_trip_by_number() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_code(code.code()), Some(code));
        }
    }

    #[test]
    fn test_code_display_is_numeric() {
        assert_eq!(ErrorCode::NonCaseInSwitch.to_string(), "9");
    }
}

#[cfg(test)]
mod diagnostic_tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic::new(
            ErrorCode::CaseOutsideSwitch,
            "'case' was found out of a switch statement. Did you mismatch a '{ }' pair?",
            "main.oreo",
            Location::new(12, 30, 4, 1),
        )
        .with_excerpt(Excerpt::new(4, "case 1", "~~~~~^"))
        .with_hint("Got: 'case 1'.\nDid you mismatch a '{ }' pair?")
    }

    #[test]
    fn test_first_line_has_code_and_message() {
        let rendered = sample().to_string();
        let first = rendered.lines().next().unwrap();
        assert_eq!(
            first,
            "error[8]: 'case' was found out of a switch statement. Did you mismatch a '{ }' pair?"
        );
    }

    #[test]
    fn test_locator_line() {
        let rendered = sample().to_string();
        assert_eq!(rendered.lines().nth(1), Some("--> main.oreo:4:1:"));
    }

    #[test]
    fn test_excerpt_and_underline() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "  | ");
        assert_eq!(lines[3], "4 | case 1");
        assert_eq!(lines[4], "  | ~~~~~^");
    }

    #[test]
    fn test_hint_follows_blank_lines() {
        let rendered = sample().to_string();
        assert!(rendered.ends_with("\n\n\nGot: 'case 1'.\nDid you mismatch a '{ }' pair?"));
    }

    #[test]
    fn test_diagnostic_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(sample());
        assert!(error.to_string().contains("error[8]"));
    }
}
