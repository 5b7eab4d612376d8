//! Simplification rules for sums and differences of like terms.

use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::do_binary;

/// Splits a term into its numeric coefficient and the rest of the term. If the term has no
/// leading number, the coefficient is `1`.
///
/// - `3*a` -> `(3, a)`
/// - `a` -> `(1, a)`
fn split_coefficient(node: &Node) -> (f64, &Node) {
    match node {
        Node::Binary { op: BinOp::Mul, lhs, rhs } => match lhs.as_number() {
            Some(coefficient) => (coefficient, rhs),
            None => (1.0, node),
        },
        node => (1.0, node),
    }
}

/// If the two terms are like terms, returns their sum (`sign = 1`) or difference (`sign = -1`).
fn combine(lhs: &Node, rhs: &Node, sign: f64) -> Option<Node> {
    let (lhs_coefficient, lhs_term) = split_coefficient(lhs);
    let (rhs_coefficient, rhs_term) = split_coefficient(rhs);

    if lhs_term.is_number() || !lhs_term.equivalent(rhs_term) {
        return None;
    }

    let coefficient = lhs_coefficient + sign * rhs_coefficient;
    if !coefficient.is_finite() {
        return None;
    }

    Some(if coefficient == 0.0 {
        Node::Number(0.0)
    } else if coefficient == 1.0 {
        lhs_term.clone()
    } else {
        Node::binary(BinOp::Mul, Node::number(coefficient), lhs_term.clone())
    })
}

/// Combines like terms.
///
/// `a+a = 2*a`
/// `a-a = 0`
/// `2*a+3*a = 5*a`
/// `3*a-a = 2*a`
pub fn combine_like_terms(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Add, |lhs, rhs| combine(lhs, rhs, 1.0))
        .or_else(|| do_binary(node, BinOp::Sub, |lhs, rhs| combine(lhs, rhs, -1.0)))?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all like-term rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    combine_like_terms(node, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use implot_parser::parse;

    fn simplify(source: &str) -> Option<String> {
        all(&parse(source).unwrap(), &mut ()).map(|node| node.to_string())
    }

    #[test]
    fn sum_of_equal_terms() {
        assert_eq!(simplify("x + x").as_deref(), Some("2 * x"));
        assert_eq!(simplify("x*y + y*x").as_deref(), Some("2 * (x * y)"));
    }

    #[test]
    fn difference_of_equal_terms() {
        assert_eq!(simplify("x - x").as_deref(), Some("0"));
        assert_eq!(simplify("sin(x) - sin(x)").as_deref(), Some("0"));
    }

    #[test]
    fn with_coefficients() {
        assert_eq!(simplify("2x + 3x").as_deref(), Some("5 * x"));
        assert_eq!(simplify("3x - x").as_deref(), Some("2 * x"));
        assert_eq!(simplify("2x - x").as_deref(), Some("x"));
        assert_eq!(simplify("x - 3x").as_deref(), Some("-2 * x"));
        assert_eq!(simplify("-x + x").as_deref(), Some("0"));
    }

    #[test]
    fn unlike_terms() {
        assert_eq!(simplify("x + y"), None);
        assert_eq!(simplify("x - y"), None);
        assert_eq!(simplify("2 + 3"), None);
        assert_eq!(simplify("x^2 + x"), None);
    }
}
