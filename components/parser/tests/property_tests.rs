//! Property tests for literal values and token spans

use core_types::ParseOptions;
use parser::{tokenize, Lexer, LexError, TokenKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_decimal_literal_value(whole in 0u32..1_000_000, fraction in prop::option::of("[0-9]{1,6}")) {
        let source = match &fraction {
            Some(digits) => format!("{}.{}", whole, digits),
            None => whole.to_string(),
        };
        let expected: f64 = source.parse().unwrap();

        let tokens = Lexer::new(&source).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::NumberLiteral(expected));
        prop_assert_eq!(tokens[0].loc.end, source.len());
    }

    #[test]
    fn prop_binary_literal_value(digits in "[01]{1,40}") {
        let expected = digits
            .chars()
            .fold(0.0f64, |acc, digit| acc * 2.0 + if digit == '1' { 1.0 } else { 0.0 });

        let tokens = Lexer::new(&format!("0b{}", digits)).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::NumberLiteral(expected));
    }

    #[test]
    fn prop_binary_prefix_without_digits_fails(suffix in "[2-9a-zA-Z_ ]{0,4}") {
        let source = format!("0b{}", suffix);
        let result = Lexer::new(&source).tokenize();
        prop_assert!(
            matches!(result, Err(LexError::InvalidBinaryLiteral { .. })),
            "{:?} should be rejected",
            source
        );
    }

    #[test]
    fn prop_token_spans_are_ordered(words in prop::collection::vec(
        prop::sample::select(vec![
            "let", "x", "=", "1.5", "0b101", "'s'", "\"t\"", "+", "&&", "!=", "(", ")",
            "{", "}", "[", "]", ",", ";", ":", "|", "!", "// note\n", "/* c */", "\n", "\t",
        ]),
        0..64,
    )) {
        let source = words.join(" ");
        let tokens = tokenize(&source, &ParseOptions::default()).unwrap();

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].loc.start < pair[0].loc.end);
            prop_assert!(pair[0].loc.end <= pair[1].loc.start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }
}
