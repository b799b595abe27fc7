use calc_ast::ast::*;
use calc_ast::visit::{VisitResult, Visitable, Visitor};
use pretty_assertions::assert_eq;

/// A test visitor that counts leaves and operators
#[derive(Default)]
struct NodeCounter {
    numbers: usize,
    operators: usize,
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_number(&mut self, _value: f64) -> VisitResult<Self::Output> {
        self.numbers += 1;
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.operators += 1;
        self.visit_children(node)
    }
}

/// Sums every leaf, used to check that traversal reaches all of them
struct LeafSum;

impl Visitor for LeafSum {
    type Output = f64;

    fn visit_number(&mut self, value: f64) -> VisitResult<Self::Output> {
        Ok(value)
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        Ok(node.left.accept(self)? + node.right.accept(self)?)
    }
}

// (1 - 2) ^ (3 / 4)
fn sample_tree() -> ExpressionNode {
    ExpressionNode::binary(
        ExpressionNode::binary(
            ExpressionNode::Number(1.0),
            BinaryOperator::Sub,
            ExpressionNode::Number(2.0),
        ),
        BinaryOperator::Pow,
        ExpressionNode::binary(
            ExpressionNode::Number(3.0),
            BinaryOperator::Div,
            ExpressionNode::Number(4.0),
        ),
    )
}

#[test]
fn test_expression_node_visitor() -> Result<(), Box<dyn std::error::Error>> {
    let tree = sample_tree();
    let mut counter = NodeCounter::default();
    tree.accept(&mut counter)?;

    assert_eq!(counter.numbers, 4);
    assert_eq!(counter.operators, 3);
    assert_eq!(counter.numbers + counter.operators, tree.node_count());
    Ok(())
}

#[test]
fn test_visitor_with_output() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(sample_tree().accept(&mut LeafSum)?, 10.0);
    Ok(())
}

#[test]
fn test_default_visitor_walks_without_output() -> Result<(), Box<dyn std::error::Error>> {
    struct Noop;
    impl Visitor for Noop {
        type Output = ();
    }
    sample_tree().accept(&mut Noop)?;
    Ok(())
}

#[test]
fn test_evaluate_sample_tree() {
    // (1 - 2) ^ 0.75 has a negative base and fractional exponent
    assert!(sample_tree().evaluate().is_nan());
}

#[test]
fn test_describe_matches_structure() {
    let expected = "\
Operator(Pow)
  Operator(Sub)
    Number(1)
    Number(2)
  Operator(Div)
    Number(3)
    Number(4)
";
    assert_eq!(sample_tree().describe(), expected);
    assert_eq!(sample_tree().to_string(), "((1 - 2) ^ (3 / 4))");
}
