//! Abstract Syntax Tree (AST) for arithmetic expressions.
//!
//! This crate defines the expression tree produced by the parser, its
//! evaluator, and utilities for traversing and printing trees.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode};
pub use visit::{AstPrinter, VisitError, VisitResult, Visitable, Visitor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST serialization.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, serde_json::Error>;

/// Serializes an AST node to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use calc_ast::ast::*;
/// use calc_ast::to_json;
///
/// let expr = ExpressionNode::binary(
///     ExpressionNode::Number(1.0),
///     BinaryOperator::Add,
///     ExpressionNode::Number(2.0),
/// );
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains(r#""operator": "Add""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}
