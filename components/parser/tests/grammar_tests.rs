//! Grammar tests over whole programs
//!
//! Each test parses a small Oreo program and checks the shape of the
//! resulting tree or the diagnostic it fails with.

use core_types::{Diagnostic, ErrorCode, ParseOptions};
use parser::{
    parse_source, tokenize, AssignmentOperator, BinaryOperator, CaseType, MemberSeparator, Node,
    TokenKind, UpdateOperator,
};

fn parse(source: &str) -> Vec<Node> {
    parse_source(source, &ParseOptions::default()).unwrap()
}

fn fail(source: &str) -> Diagnostic {
    parse_source(source, &ParseOptions::default()).unwrap_err()
}

fn value_of(node: &Node) -> &Node {
    match node {
        Node::AssignmentExpression { value, .. } => value,
        Node::VariableDeclaration {
            value: Some(value), ..
        } => value,
        other => panic!("expected a node with a value, got {:?}", other),
    }
}

/// Render binary trees as fully parenthesized text
fn shape(node: &Node) -> String {
    match node {
        Node::BinaryExpression {
            operator,
            left,
            right,
            ..
        } => format!("({} {} {})", shape(left), operator, shape(right)),
        other => other.summary(),
    }
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_precedence_shapes() {
    let ast = parse("a = 1 + 2 * 3\nb = 1 * 2 + 3\nc = 1 + 2 * 3 - 4");
    assert_eq!(shape(value_of(&ast[0])), "(1 + (2 * 3))");
    assert_eq!(shape(value_of(&ast[1])), "((1 * 2) + 3)");
    assert_eq!(shape(value_of(&ast[2])), "((1 + (2 * 3)) - 4)");
}

#[test]
fn test_precedence_operator_fields() {
    let ast = parse("x = 1 + 2 * 3");
    match value_of(&ast[0]) {
        Node::BinaryExpression {
            operator: BinaryOperator::Add,
            right,
            ..
        } => assert!(matches!(
            right.as_ref(),
            Node::BinaryExpression {
                operator: BinaryOperator::Multiply,
                ..
            }
        )),
        other => panic!("expected addition, got {:?}", other),
    }
}

#[test]
fn test_comparison_and_logic() {
    let ast = parse("ok = a != b && c == 1 || !d");
    assert_eq!(shape(value_of(&ast[0])), "(((a != b) && (c == 1)) || UnaryExpression)");
}

#[test]
fn test_equals_is_never_a_binary_operator() {
    let tokens = tokenize("x = 1", &ParseOptions::default()).unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Punctuation('='));

    let err = fail("let v = 1 + = 2");
    assert_eq!(err.code, ErrorCode::UnexpectedStatement);
}

#[test]
fn test_parenthesized_groups() {
    let ast = parse("x = (1 + 2) * 3");
    assert_eq!(shape(value_of(&ast[0])), "((1 + 2) * 3)");
}

#[test]
fn test_member_access_separators() {
    let ast = parse("a.b.c = 1\nself:call(2)");
    match &ast[0] {
        Node::ObjectExpression {
            property,
            expression_type: MemberSeparator::Dot,
            ..
        } => assert!(matches!(property.as_ref(), Node::ObjectExpression { .. })),
        other => panic!("expected member access, got {:?}", other),
    }
    assert!(matches!(
        &ast[1],
        Node::ObjectExpression {
            expression_type: MemberSeparator::Colon,
            ..
        }
    ));
}

#[test]
fn test_object_literal_and_array_values() {
    let ast = parse("let config = { name = 'oreo', [1] = true, sizes = [1, 2, 3] }");
    match value_of(&ast[0]) {
        Node::ObjectLiteralExpression { entries, .. } => {
            assert_eq!(entries.len(), 3);
            assert!(entries[1].computed);
            assert!(matches!(entries[2].value, Some(Node::ArrayExpression { .. })));
        }
        other => panic!("expected object literal, got {:?}", other),
    }
}

#[test]
fn test_compound_assignment_operators() {
    let ast = parse("a += 1; b -= 1; c *= 2; d /= 2");
    let operators: Vec<AssignmentOperator> = ast
        .iter()
        .map(|node| match node {
            Node::AssignmentExpression { operator, .. } => *operator,
            other => panic!("expected assignment, got {:?}", other),
        })
        .collect();
    assert_eq!(
        operators,
        [
            AssignmentOperator::AddAssign,
            AssignmentOperator::SubAssign,
            AssignmentOperator::MulAssign,
            AssignmentOperator::DivAssign,
        ]
    );
}

// =============================================================================
// Loops
// =============================================================================

#[test]
fn test_for_loop_with_explicit_update() {
    let ast = parse("for let i = 0, i < 5, i++ { }");
    match &ast[0] {
        Node::ForStatement {
            init,
            test,
            update,
            body,
            ..
        } => {
            match init.as_ref() {
                Node::VariableDeclaration { identifier, .. } => assert_eq!(identifier.text(), "i"),
                other => panic!("expected declaration, got {:?}", other),
            }
            assert_eq!(shape(test), "(i < 5)");
            match update.as_ref() {
                Node::UpdateExpression {
                    identifier,
                    operator,
                    ..
                } => {
                    assert_eq!(identifier.text(), "i");
                    assert_eq!(*operator, UpdateOperator::Increment);
                }
                other => panic!("expected update, got {:?}", other),
            }
            assert!(matches!(body.as_ref(), Node::BlockStatement { body, .. } if body.is_empty()));
        }
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_for_loop_with_assignment_update() {
    let ast = parse("for let i = 0, i < n, i = i + 2 { }");
    match &ast[0] {
        Node::ForStatement { update, .. } => match update.as_ref() {
            Node::AssignmentExpression { value, .. } => assert_eq!(shape(value), "(i + 2)"),
            other => panic!("expected assignment update, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_for_loop_default_update_matches_explicit_shape() {
    let implicit = parse("for let i = 0, i < 5 { }");
    let explicit = parse("for let i = 0, i < 5, i++ { }");
    let update_of = |ast: &[Node]| match &ast[0] {
        Node::ForStatement { update, .. } => match update.as_ref() {
            Node::UpdateExpression {
                identifier,
                operator,
                ..
            } => (identifier.text(), *operator),
            other => panic!("expected update, got {:?}", other),
        },
        other => panic!("expected for, got {:?}", other),
    };
    assert_eq!(update_of(&implicit), update_of(&explicit));
}

#[test]
fn test_for_loop_default_update_points_at_declared_name() {
    let ast = parse("for let i = 0, i < 5 { }");
    match &ast[0] {
        Node::ForStatement { update, .. } => {
            let loc = update.loc();
            assert_eq!((loc.start, loc.end), (8, 9));
            assert_eq!((loc.line, loc.column), (1, 9));
        }
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_for_loop_missing_comma_excerpt() {
    let err = fail("for i = 0, i < 5 i++ {}");
    assert_eq!(err.code, ErrorCode::ExpectedToken);
    assert_eq!(err.message, "Expected 'comma' when parsing for loop, got 'i'");
    assert_eq!(err.excerpt[0].text, "for ... i");
}

#[test]
fn test_while_with_single_statement_body() {
    let ast = parse("while x < 10 x += 1");
    assert!(matches!(
        &ast[0],
        Node::WhileStatement { consequent, .. } if matches!(consequent.as_ref(), Node::AssignmentExpression { .. })
    ));
}

// =============================================================================
// Switch and case
// =============================================================================

#[test]
fn test_switch_with_default_only() {
    let ast = parse("switch x { default: return 1; }");
    match &ast[0] {
        Node::SwitchStatement { body, .. } => {
            assert_eq!(body.len(), 1);
            assert_eq!(body[0].case_type, CaseType::Default);
            assert!(matches!(body[0].body.as_ref(), Node::ReturnStatement { .. }));
        }
        other => panic!("expected switch, got {:?}", other),
    }
}

#[test]
fn test_switch_rejects_non_case() {
    let err = fail("switch x { let y = 1; }");
    assert_eq!(err.code, ErrorCode::NonCaseInSwitch);
    assert_eq!(
        err.message,
        "Found a 'non-case' object in a switch statement. Only case statements are allowed."
    );
}

#[test]
fn test_case_after_early_close() {
    let err = fail("switch x {\n}\ncase 2 { y = 1 }");
    assert_eq!(err.code, ErrorCode::CaseOutsideSwitch);
    assert_eq!(err.location.line, 3);
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_function_with_single_statement_body() {
    let ast = parse("fn add(a, b) return a + b;");
    match &ast[0] {
        Node::FunctionDeclaration {
            identifier,
            arguments,
            body,
            ..
        } => {
            assert!(identifier.is_identifier());
            assert_eq!(identifier.summary(), "add");
            let names: Vec<String> = arguments.iter().map(|token| token.text()).collect();
            assert_eq!(names, ["a", "b"]);
            match body.as_ref() {
                Node::ReturnStatement {
                    statement: Some(value),
                    ..
                } => assert_eq!(shape(value), "(a + b)"),
                other => panic!("expected return, got {:?}", other),
            }
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_method_declaration() {
    let ast = parse("fn obj.method(a, b) { return a }");
    match &ast[0] {
        Node::FunctionDeclaration {
            identifier,
            arguments,
            ..
        } => {
            match identifier.as_ref() {
                Node::ObjectExpression {
                    object, property, ..
                } => {
                    assert_eq!(object.summary(), "obj");
                    assert_eq!(property.summary(), "method");
                }
                other => panic!("expected member name, got {:?}", other),
            }
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_anonymous_function_value() {
    let ast = parse("let f = fn (x) { return x * 2 }");
    assert!(matches!(value_of(&ast[0]), Node::AnonymousFunctionDeclaration { .. }));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_if_at_end_of_input_is_an_error() {
    let err = fail("if ready");
    assert_eq!(err.code, ErrorCode::ExpectedToken);
    assert_eq!(err.message, "Unexpected end of file while parsing statement");
}

#[test]
fn test_unterminated_string_cites_opening_line() {
    let err = fail("x = 1\ny = \"abc");
    assert_eq!(err.code, ErrorCode::UnterminatedString);
    assert_eq!(err.location.line, 2);
    assert_eq!(err.excerpt[0].text, "\"abc");
}

#[test]
fn test_unterminated_string_spanning_lines() {
    let err = fail("x = 'first\nsecond\nthird");
    assert_eq!(err.location.line, 1);
    assert_eq!(err.excerpt[0].line, 1);
}

#[test]
fn test_unclosed_parenthesis_rendering() {
    let err = fail("x = (1 + 2");
    let rendered = err.to_string();
    assert!(rendered.starts_with(
        "error[7]: Expected closing parenthesis \")\" when parsing parenthesis, got 'nothing'\n--> main.oreo:1:5:"
    ));
    assert!(rendered.contains("1 | (...\n  | ~~~~^"));
    assert!(rendered.ends_with("Expected ')' to close '(' at 1:5."));
}

#[test]
fn test_nested_comment_is_one_token() {
    let tokens = tokenize("/* a /* b */ still-a */", &ParseOptions::default()).unwrap();
    assert_eq!(tokens.len(), 1);
    match &tokens[0].kind {
        TokenKind::MultiLineComment(text) => {
            assert!(text.contains("/* b */"));
            assert!(text.ends_with("still-a "));
        }
        other => panic!("expected comment, got {:?}", other),
    }
    assert_eq!(tokens[0].loc.end, 23);
}

#[test]
fn test_multi_dot_number_is_one_token() {
    let tokens = tokenize("1.2.3", &ParseOptions::default()).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral(1.2));
    assert_eq!(tokens[0].loc.end, 5);
}

#[test]
fn test_nesting_limit_is_configurable() {
    let source = "x = ((((((1))))))";
    assert!(parse_source(source, &ParseOptions::default()).is_ok());

    let err = parse_source(source, &ParseOptions::default().with_max_depth(4)).unwrap_err();
    assert_eq!(err.code, ErrorCode::MisplacedToken);
    assert!(err.message.contains("limit of 4"));
}

#[test]
fn test_every_recursive_form_is_depth_limited() {
    let cases = [
        ("assignment", format!("{}1", "a = ".repeat(1000))),
        ("compound assignment", format!("{}1", "a += ".repeat(1000))),
        ("index assignment", format!("{}1", "a[0] = ".repeat(1000))),
        ("member chain", format!("x = a{}", ".b".repeat(1000))),
        ("not chain", format!("x = {}a", "!".repeat(1000))),
        ("index chain", format!("x = a{}", "[0]".repeat(1000))),
        ("elseif chain", format!("if a {{}}{}", " elseif a {}".repeat(1000))),
    ];
    for (name, source) in cases {
        let err = fail(&source);
        assert_eq!(err.code, ErrorCode::MisplacedToken, "{}", name);
        assert!(err.message.contains("limit of 256"), "{}: {}", name, err.message);
    }
}
