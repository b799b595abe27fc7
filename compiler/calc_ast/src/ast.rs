// Abstract Syntax Tree (AST) definitions for arithmetic expressions.
// Trees are built bottom-up by the parser and never mutated afterwards.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree node.
///
/// Every leaf is a number and every interior node is a binary operator that
/// exclusively owns both operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    Number(f64),
    Binary(Box<BinaryExpressionNode>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    /// The source symbol for this operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "^",
        }
    }

    /// Applies the operator with plain IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN and `Pow` follows `f64::powf`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
            BinaryOperator::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl ExpressionNode {
    /// Creates a binary node owning both operands.
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// Evaluates the tree to a floating-point value.
    ///
    /// Runs on an explicit work stack, so arbitrarily long operator chains
    /// evaluate without deep recursion.
    pub fn evaluate(&self) -> f64 {
        enum Step<'a> {
            Eval(&'a ExpressionNode),
            Apply(BinaryOperator),
        }

        let mut steps = vec![Step::Eval(self)];
        let mut values: Vec<f64> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Eval(ExpressionNode::Number(value)) => values.push(*value),
                Step::Eval(ExpressionNode::Binary(bin)) => {
                    steps.push(Step::Apply(bin.operator));
                    steps.push(Step::Eval(&bin.right));
                    steps.push(Step::Eval(&bin.left));
                }
                Step::Apply(operator) => {
                    // Both operands were pushed before their `Apply` step
                    let rhs = values.pop().unwrap_or(f64::NAN);
                    let lhs = values.pop().unwrap_or(f64::NAN);
                    values.push(operator.apply(lhs, rhs));
                }
            }
        }
        values.pop().unwrap_or(f64::NAN)
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let ExpressionNode::Binary(bin) = node {
                pending.push(&bin.left);
                pending.push(&bin.right);
            }
        }
        count
    }

    /// Height of the tree; a single number has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let ExpressionNode::Binary(bin) = node {
                pending.push((&bin.left, level + 1));
                pending.push((&bin.right, level + 1));
            }
        }
        deepest
    }
}

// The derived drop glue recurses once per level; long chains would exhaust
// the stack. Children are detached and dropped from a heap-allocated list.
impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let ExpressionNode::Binary(bin) = self else {
            return;
        };
        let mut detached = vec![
            std::mem::replace(&mut bin.left, ExpressionNode::Number(0.0)),
            std::mem::replace(&mut bin.right, ExpressionNode::Number(0.0)),
        ];
        while let Some(mut node) = detached.pop() {
            if let ExpressionNode::Binary(bin) = &mut node {
                detached.push(std::mem::replace(&mut bin.left, ExpressionNode::Number(0.0)));
                detached.push(std::mem::replace(&mut bin.right, ExpressionNode::Number(0.0)));
            }
        }
    }
}

/// Fully parenthesised infix form, e.g. `(2 + (3 * 4))`.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a ExpressionNode),
            Operator(BinaryOperator),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(ExpressionNode::Number(value)) => write!(f, "{value}")?,
                Piece::Node(ExpressionNode::Binary(bin)) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(&bin.right));
                    pieces.push(Piece::Operator(bin.operator));
                    pieces.push(Piece::Node(&bin.left));
                }
                Piece::Operator(operator) => write!(f, " {operator} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl From<f64> for ExpressionNode {
    fn from(value: f64) -> Self {
        ExpressionNode::Number(value)
    }
}
