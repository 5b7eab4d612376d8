//! Simplification rules that combine two ratios into one.

use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::do_binary;

/// Returns the numerator and denominator of the node if it is a ratio.
fn as_ratio(node: &Node) -> Option<(&Node, &Node)> {
    match node {
        Node::Ratio { numerator, denominator } => Some((numerator, denominator)),
        _ => None,
    }
}

/// `(a/b)*(c/d) = (a*c)/(b*d)`
pub fn multiply_ratios(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        let (a, b) = as_ratio(lhs)?;
        let (c, d) = as_ratio(rhs)?;
        Some(Node::ratio(
            Node::binary(BinOp::Mul, a.clone(), c.clone()),
            Node::binary(BinOp::Mul, b.clone(), d.clone()),
        ))
    })?;

    step_collector.push(Step::MultiplyRatios);
    Some(opt)
}

/// Combines two ratios joined by `op`, which is either `+` or `-`.
///
/// `(a/b)+(c/b) = (a+c)/b`
/// `(a/b)+(c/d) = (a*d+c*b)/(b*d)`
fn combine_ratios(lhs: &Node, rhs: &Node, op: BinOp) -> Option<Node> {
    let (a, b) = as_ratio(lhs)?;
    let (c, d) = as_ratio(rhs)?;

    if b.equivalent(d) {
        return Some(Node::ratio(Node::binary(op, a.clone(), c.clone()), b.clone()));
    }

    Some(Node::ratio(
        Node::binary(
            op,
            Node::binary(BinOp::Mul, a.clone(), d.clone()),
            Node::binary(BinOp::Mul, c.clone(), b.clone()),
        ),
        Node::binary(BinOp::Mul, b.clone(), d.clone()),
    ))
}

/// `(a/b)+(c/d) = (a*d+c*b)/(b*d)`
pub fn add_ratios(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Add, |lhs, rhs| combine_ratios(lhs, rhs, BinOp::Add))?;

    step_collector.push(Step::AddRatios);
    Some(opt)
}

/// `(a/b)-(c/d) = (a*d-c*b)/(b*d)`
pub fn subtract_ratios(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Sub, |lhs, rhs| combine_ratios(lhs, rhs, BinOp::Sub))?;

    step_collector.push(Step::SubtractRatios);
    Some(opt)
}

/// Applies all ratio distribution rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_ratios(node, step_collector)
        .or_else(|| add_ratios(node, step_collector))
        .or_else(|| subtract_ratios(node, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use implot_parser::parse;

    fn simplify(source: &str) -> Option<Node> {
        all(&parse(source).unwrap(), &mut ())
    }

    #[test]
    fn multiply() {
        assert_eq!(simplify("(a/b)*(c/d)"), Some(parse("(a*c)/(b*d)").unwrap()));
        assert_eq!(simplify("(a/b)*c"), None);
    }

    #[test]
    fn add_with_equivalent_denominators() {
        assert_eq!(simplify("x/(2+y) + 1/(y+2)"), Some(parse("(x+1)/(2+y)").unwrap()));
    }

    #[test]
    fn add_with_different_denominators() {
        assert_eq!(simplify("a/b + c/d"), Some(parse("(a*d + c*b)/(b*d)").unwrap()));
    }

    #[test]
    fn subtract() {
        assert_eq!(simplify("a/b - c/b"), Some(parse("(a - c)/b").unwrap()));
        assert_eq!(simplify("1/2 - 1/3"), Some(parse("(1*3 - 1*2)/(2*3)").unwrap()));
    }

    #[test]
    fn records_step() {
        let mut steps: Vec<Step> = Vec::new();
        all(&parse("a/b - c/d").unwrap(), &mut steps);
        assert_eq!(steps, vec![Step::SubtractRatios]);
    }
}
