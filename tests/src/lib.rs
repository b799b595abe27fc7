//! Shared helpers for the end-to-end tests.

use calc_ast::ExpressionNode;
use calc_lexer::{lex, Token};
use calc_parser::{ParseError, Parser};

/// Lexes `source`, panicking on a lexer error.
pub fn tokens(source: &str) -> Vec<Token> {
    lex(source).unwrap_or_else(|e| panic!("failed to lex {source:?}: {e}"))
}

/// Lexes and parses `source`.
pub fn parse(source: &str) -> Result<Option<ExpressionNode>, ParseError> {
    Parser::new(tokens(source)).parse()
}

/// Lexes, parses and evaluates `source`, panicking on any error or empty input.
pub fn eval(source: &str) -> f64 {
    match parse(source) {
        Ok(Some(expr)) => expr.evaluate(),
        other => panic!("Expected a value for {source:?}, got {other:?}"),
    }
}
