//! Simplification rules that combine factors with the same base into a single power.

use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::do_binary;

/// Splits the node into a base and an exponent. If the node is not a power, the exponent is `1`.
///
/// - `a^b` -> `(a, b)`
/// - `a` -> `(a, 1)`
fn split_power(node: &Node) -> (&Node, Node) {
    match node {
        Node::Binary { op: BinOp::Exp, lhs, rhs } => (lhs, (**rhs).clone()),
        node => (node, Node::Number(1.0)),
    }
}

/// Adds two exponents, evaluating the sum immediately if both are numbers.
fn add_exponents(a: Node, b: Node) -> Node {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => Node::number(a + b),
        _ => Node::binary(BinOp::Add, a, b),
    }
}

/// If the two factors have equivalent bases, returns their product as a single power.
///
/// Numeric bases are left to constant folding.
fn combine(lhs: &Node, rhs: &Node) -> Option<Node> {
    let (lhs_base, lhs_exp) = split_power(lhs);
    let (rhs_base, rhs_exp) = split_power(rhs);

    if lhs_base.is_number() || !lhs_base.equivalent(rhs_base) {
        return None;
    }

    Some(Node::binary(BinOp::Exp, lhs_base.clone(), add_exponents(lhs_exp, rhs_exp)))
}

/// Combines factors of the same base.
///
/// `x*x = x^2`
/// `x^2*x = x^3`
/// `x^a*x^b = x^(a+b)`
/// `(c*x)*x = c*x^2`
/// `x*(c*x) = c*x^2`
pub fn combine_powers(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        combine(lhs, rhs)
            .or_else(|| match lhs {
                Node::Binary { op: BinOp::Mul, lhs: coefficient, rhs: factor } => {
                    combine(factor, rhs)
                        .map(|power| Node::binary(BinOp::Mul, (**coefficient).clone(), power))
                },
                _ => None,
            })
            .or_else(|| match rhs {
                Node::Binary { op: BinOp::Mul, lhs: coefficient, rhs: factor } => {
                    combine(lhs, factor)
                        .map(|power| Node::binary(BinOp::Mul, (**coefficient).clone(), power))
                },
                _ => None,
            })
    })?;

    step_collector.push(Step::CombinePowers);
    Some(opt)
}

/// Applies all power rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    combine_powers(node, step_collector)
}
