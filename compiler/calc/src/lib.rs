//! Evaluates arithmetic expressions from source text.
//!
//! The pipeline is text → `calc_lexer::lex` → `calc_parser::Parser` →
//! `ExpressionNode::evaluate`. This crate ties the stages together and
//! provides the error type the command-line shell reports.

use calc_ast::ExpressionNode;
use calc_lexer::{lex, LexError, Token};
use calc_parser::{Diagnostic, ParseError, Parser, ParserConfig};
use thiserror::Error;

/// Any failure on the way from text to a value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CalcError {
    /// A diagnostic for this error, located in `source`
    pub fn diagnostic(&self, source: &str) -> Diagnostic {
        match self {
            CalcError::Lex(e) => Diagnostic::from_lex_error(e),
            CalcError::Parse(e) => Diagnostic::from_parse_error(e, source),
        }
    }
}

/// Every intermediate product of evaluating one input
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub tokens: Vec<Token>,
    /// `None` when the input holds no tokens
    pub ast: Option<ExpressionNode>,
    pub value: Option<f64>,
}

/// Lexes, parses and evaluates `source`, keeping the tokens and tree.
pub fn analyze(source: &str, config: ParserConfig) -> Result<Evaluation, CalcError> {
    let tokens = lex(source)?;
    log::debug!("lexed {} tokens", tokens.len());

    let parser = Parser::with_config(tokens, config);
    let ast = parser.parse()?;
    let value = ast.as_ref().map(ExpressionNode::evaluate);

    Ok(Evaluation {
        tokens: parser.tokens().to_vec(),
        ast,
        value,
    })
}

/// Evaluates `source` with the default parser configuration.
///
/// Returns `Ok(None)` for input that contains only whitespace.
///
/// ```
/// assert_eq!(calc::evaluate_source("2 ^ 3 ^ 2").unwrap(), Some(512.0));
/// assert_eq!(calc::evaluate_source("  ").unwrap(), None);
/// ```
pub fn evaluate_source(source: &str) -> Result<Option<f64>, CalcError> {
    let tokens = lex(source)?;
    let ast = Parser::new(tokens).parse()?;
    Ok(ast.map(|expr| expr.evaluate()))
}
