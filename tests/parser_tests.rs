// End-to-end parser tests: lexer output fed straight into the parser
use calc_ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode};
use calc_lexer::TokenType;
use calc_parser::{ParseError, Parser};
use pretty_assertions::assert_eq;
use tests::{parse, tokens};

#[test]
fn test_simple_binary_expression() {
    let expr = parse("1 + 2 * 3").unwrap().unwrap();
    assert_eq!(
        expr,
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left: ExpressionNode::Number(1.0),
            operator: BinaryOperator::Add,
            right: ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left: ExpressionNode::Number(2.0),
                operator: BinaryOperator::Mul,
                right: ExpressionNode::Number(3.0),
            })),
        }))
    );
}

#[test]
fn test_display_shows_grouping() {
    let cases = [
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("1 - (2 - 3)", "(1 - (2 - 3))"),
        ("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))"),
        ("2 * 3 ^ 2 + 1", "((2 * (3 ^ 2)) + 1)"),
    ];
    for (source, expected) in cases {
        assert_eq!(parse(source).unwrap().unwrap().to_string(), expected);
    }
}

#[test]
fn test_describe_dump() {
    let expr = parse("(1 + 2) * 3").unwrap().unwrap();
    assert_eq!(
        expr.describe(),
        "Operator(Mul)\n  Operator(Add)\n    Number(1)\n    Number(2)\n  Number(3)\n"
    );
}

#[test]
fn test_parsing_twice_gives_identical_trees() {
    let parser = Parser::new(tokens("(1.5 + 2) ^ 2 / 4 - 1"));
    let first = parser.parse().unwrap();
    let second = parser.parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.map(|e| e.evaluate()),
        second.map(|e| e.evaluate())
    );
}

#[test]
fn test_empty_input_has_no_tree() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse(" \r\n "), Ok(None));
}

#[test]
fn test_unmatched_close_paren() {
    match parse("2+3)") {
        Err(ParseError::TrailingTokens { token }) => {
            assert_eq!(token.token_type, TokenType::ParenR);
        }
        other => panic!("Expected TrailingTokens, got {other:?}"),
    }
}

#[test]
fn test_unary_minus_is_unexpected() {
    for source in ["-3", "2^-1", "(-2)"] {
        assert!(
            matches!(parse(source), Err(ParseError::UnexpectedToken { .. })),
            "{source:?}"
        );
    }
}

#[test]
fn test_malformed_number_is_rejected_by_parser() {
    assert_eq!(tokens("1.2.3").len(), 1);
    assert!(matches!(
        parse("1.2.3"),
        Err(ParseError::UnparseableNumber { .. })
    ));
}

#[test]
fn test_ast_json_round_trip() {
    let expr = parse("2 ^ (1 + 1)").unwrap().unwrap();
    let json = calc_ast::to_json(&expr).unwrap();
    let back: ExpressionNode = calc_ast::from_json(&json).unwrap();
    assert_eq!(back, expr);
    assert_eq!(back.evaluate(), 4.0);
}
