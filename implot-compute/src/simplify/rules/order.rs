//! Simplification rules that reorder operands into a canonical order without changing the
//! structure of the tree.

use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::do_binary;

/// Moves a number to the left of a product, where it reads as a coefficient.
///
/// `a*2 = 2*a`
pub fn order_literals(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        (rhs.is_number() && !lhs.is_number())
            .then(|| Node::binary(BinOp::Mul, rhs.clone(), lhs.clone()))
    })?;

    step_collector.push(Step::OrderLiterals);
    Some(opt)
}

/// Applies all ordering rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    order_literals(node, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use implot_parser::parse;

    #[test]
    fn number_moves_left() {
        assert_eq!(
            all(&parse("x * 2").unwrap(), &mut ()),
            Some(parse("2 * x").unwrap()),
        );
        assert_eq!(
            all(&parse("(x + 1) * 0.5").unwrap(), &mut ()),
            Some(parse("0.5 * (x + 1)").unwrap()),
        );
    }

    #[test]
    fn already_ordered() {
        assert_eq!(all(&parse("2 * x").unwrap(), &mut ()), None);
        assert_eq!(all(&parse("2 * 3").unwrap(), &mut ()), None);
        assert_eq!(all(&parse("x * y").unwrap(), &mut ()), None);
        assert_eq!(all(&parse("x + 2").unwrap(), &mut ()), None);
    }
}
