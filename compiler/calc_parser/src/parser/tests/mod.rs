//! Parser tests
//!
//! - `expressions`: precedence, associativity and tree shape
//! - `errors`: error kinds and the empty-input case
//! - `diagnostics`: rendered error snippets


use super::*;
use crate::parser::test_utils::tokenize;

/// Lex and parse, expecting a tree
pub(super) fn parse_str(input: &str) -> ExpressionNode {
    crate::tests::init_test_logger();
    match Parser::new(tokenize(input)).parse() {
        Ok(Some(expr)) => expr,
        other => panic!("Expected expression for {input:?}, got {other:?}"),
    }
}

/// Lex and parse, expecting an error
pub(super) fn parse_err(input: &str) -> ParseError {
    crate::tests::init_test_logger();
    match Parser::new(tokenize(input)).parse() {
        Err(e) => e,
        other => panic!("Expected error for {input:?}, got {other:?}"),
    }
}
