//! Visitor pattern implementation for traversing the AST.
//!
//! `Visitable` is implemented by the tree nodes and dispatches to the matching
//! `Visitor` method. The default visitor methods walk the children and return
//! `Output::default()`.

use std::fmt::Write;

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during AST traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// Writing visitor output failed.
    #[error("failed to write output: {0}")]
    Format(#[from] std::fmt::Error),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    ///
    /// The default implementation does nothing.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor for traversing the AST.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_number(&mut self, _value: f64) -> VisitResult<Self::Output> {
        Ok(Default::default())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    // Helper to visit children of a node
    fn visit_children<T: Visitable + ?Sized>(&mut self, node: &T) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Number(value) => visitor.visit_number(*value),
            ExpressionNode::Binary(bin) => visitor.visit_binary_expr(bin),
        }
    }
}

impl Visitable for BinaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_binary_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

/// Renders a tree as an indented dump, one node per line.
///
/// ```text
/// Operator(Add)
///   Number(2)
///   Operator(Mul)
///     Number(3)
///     Number(4)
/// ```
#[derive(Default)]
pub struct AstPrinter {
    indent: usize,
    out: String,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a tree to a string.
    pub fn print<T: Visitable + ?Sized>(mut self, node: &T) -> VisitResult<String> {
        node.accept(&mut self)?;
        Ok(self.out)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) -> VisitResult {
        writeln!(self.out, "{:width$}{}", "", text, width = self.indent * 2)?;
        Ok(())
    }
}

impl Visitor for AstPrinter {
    type Output = ();

    fn visit_number(&mut self, value: f64) -> VisitResult {
        self.line(format_args!("Number({value})"))
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult {
        self.line(format_args!("Operator({:?})", node.operator))?;
        self.indent += 1;
        let result = self.visit_children(node);
        self.indent -= 1;
        result
    }
}

impl ExpressionNode {
    /// Indented tree dump used by the `--ast` debug flag.
    pub fn describe(&self) -> String {
        // Writing into a String cannot fail
        AstPrinter::new().print(self).unwrap_or_default()
    }
}
