//! Simplification rules that remove identity elements and apply absorbing elements.

use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::{do_binary, do_ratio, is_number};

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        if is_number(lhs, 1.0) {
            Some(rhs.clone())
        } else if is_number(rhs, 1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        (is_number(lhs, 0.0) || is_number(rhs, 0.0)).then_some(Node::Number(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Add, |lhs, rhs| {
        if is_number(lhs, 0.0) {
            Some(rhs.clone())
        } else if is_number(rhs, 0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Sub, |lhs, rhs| {
        is_number(rhs, 0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_ratio(node, |numerator, denominator| {
        is_number(denominator, 1.0).then(|| numerator.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Exp, |lhs, rhs| {
        is_number(rhs, 1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Exp, |_, rhs| {
        is_number(rhs, 0.0).then_some(Node::Number(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// Applies all identity rules.
///
/// All identity rules reduce the number of nodes in the tree.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_one(node, step_collector)
        .or_else(|| multiply_zero(node, step_collector))
        .or_else(|| add_zero(node, step_collector))
        .or_else(|| subtract_zero(node, step_collector))
        .or_else(|| divide_one(node, step_collector))
        .or_else(|| power_one(node, step_collector))
        .or_else(|| power_zero(node, step_collector))
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
    fn multiplication() {
        assert_eq!(simplify("1 * sin(x)").as_deref(), Some("sin(x)"));
        assert_eq!(simplify("(x + 1) * 1").as_deref(), Some("x + 1"));
        assert_eq!(simplify("0 * (x + 1)").as_deref(), Some("0"));
        assert_eq!(simplify("y * 0").as_deref(), Some("0"));
        assert_eq!(simplify("2 * y"), None);
    }

    #[test]
    fn addition_and_subtraction() {
        assert_eq!(simplify("0 + x").as_deref(), Some("x"));
        assert_eq!(simplify("x + 0").as_deref(), Some("x"));
        assert_eq!(simplify("x - 0").as_deref(), Some("x"));
        assert_eq!(simplify("0 - x"), None);
    }

    #[test]
    fn division_and_powers() {
        assert_eq!(simplify("(x + 1) / 1").as_deref(), Some("x + 1"));
        assert_eq!(simplify("1 / x"), None);
        assert_eq!(simplify("(x + 1) ^ 1").as_deref(), Some("x + 1"));
        assert_eq!(simplify("(x + 1) ^ 0").as_deref(), Some("1"));
        assert_eq!(simplify("1 ^ x"), None);
    }

    #[test]
    fn only_looks_at_root() {
        assert_eq!(simplify("(1 * x) + y"), None);
    }
}
