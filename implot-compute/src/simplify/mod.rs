//! Step-by-step simplification of expression trees.
//!
//! The simplifier performs **one** rewrite per call. [`simplify_step`] returns the rewritten tree
//! along with a flag indicating whether anything changed, and the caller decides when to stop;
//! typically it calls [`simplify_step`] repeatedly, rendering the tree after each call, until two
//! consecutive renderings are identical or an iteration limit is reached.
//!
//! Each call proceeds as follows, starting at the root:
//!
//! 1. Every rule in [`rules`] is tried on the current node, in priority order. The first rule
//!    that applies produces the rewrite for this call.
//! 2. Otherwise, the simplifier recurses into the first operand of the node (the left-hand side,
//!    the numerator, or the argument of a function call). If anything was rewritten there, that
//!    is the rewrite for this call.
//! 3. Otherwise, it recurses into the second operand (the right-hand side or the denominator).
//!
//! The rules are, in priority order:
//!
//! - [Constant folding](rules::fold): `2+3 = 5`, `6/4 = 3/2`, `2*(3*a) = 6*a`
//! - [Identities](rules::identity): `1*a = a`, `a+0 = a`, `a^0 = 1`, ...
//! - [Ratio distribution](rules::ratio): `(a/b)*(c/d) = (a*c)/(b*d)`, `(a/b)+(c/b) = (a+c)/b`
//! - [Power consolidation](rules::power): `x*x = x^2`, `x^a*x^b = x^(a+b)`
//! - [Like terms](rules::terms): `a+a = 2*a`, `a-a = 0`
//! - [Literal ordering](rules::order): `a*2 = 2*a`
//!
//! The simplifier never mutates its input; rewrites build new subtrees out of clones.
//!
//! ```
//! use implot_compute::simplify_step;
//! use implot_parser::parse;
//!
//! let node = parse("(2 + 3) * x").unwrap();
//! let (simplified, changed) = simplify_step(&node);
//!
//! assert!(changed);
//! assert_eq!(simplified.to_string(), "5 * x");
//! ```

pub mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use implot_parser::node::Node;
use log::trace;
use step::Step;

/// Applies a single rewrite to the tree, returning the new tree and whether anything changed.
pub fn simplify_step(node: &Node) -> (Node, bool) {
    simplify_step_with(node, &mut ())
}

/// Applies a single rewrite to the tree, returning the new tree and whether anything changed.
///
/// The rule that was applied, if any, is pushed to the given [`StepCollector`].
pub fn simplify_step_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> (Node, bool) {
    match rewrite(node, step_collector) {
        Some(rewritten) => (rewritten, true),
        None => (node.clone(), false),
    }
}

/// Finds the first rewrite in the tree and returns the tree with it applied.
fn rewrite(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    if let Some(rewritten) = rules::all(node, step_collector) {
        trace!("rewrote `{}` as `{}`", node, rewritten);
        return Some(rewritten);
    }

    match node {
        Node::Call { func, arg } => rewrite(arg, step_collector).map(|arg| Node::call(*func, arg)),
        Node::Binary { op, lhs, rhs } => rewrite(lhs, step_collector)
            .map(|lhs| Node::binary(*op, lhs, (**rhs).clone()))
            .or_else(|| {
                rewrite(rhs, step_collector).map(|rhs| Node::binary(*op, (**lhs).clone(), rhs))
            }),
        Node::Ratio { numerator, denominator } => rewrite(numerator, step_collector)
            .map(|numerator| Node::ratio(numerator, (**denominator).clone()))
            .or_else(|| {
                rewrite(denominator, step_collector)
                    .map(|denominator| Node::ratio((**numerator).clone(), denominator))
            }),
        Node::Number(_) | Node::Variable(_) | Node::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    use implot_parser::{node::{fmt::Markup, BinOp}, parse};

    /// Simplifies until nothing changes, returning the plain rendering of the result.
    fn simplify_fully(source: &str) -> String {
        let mut node = parse(source).unwrap();
        for _ in 0..100 {
            let (next, changed) = simplify_step(&node);
            if !changed {
                break;
            }
            node = next;
        }
        node.to_string()
    }

    #[test]
    fn fold_sum() {
        let (node, changed) = simplify_step(&parse("2 + 3").unwrap());
        assert!(changed);
        assert_eq!(node, Node::Number(5.0));
    }

    #[test]
    fn reduce_fraction() {
        let (node, changed) = simplify_step(&parse("6 / 4").unwrap());
        assert!(changed);
        assert_eq!(node, Node::ratio(Node::Number(3.0), Node::Number(2.0)));
    }

    #[test]
    fn fold_decimals() {
        let (node, _) = simplify_step(&parse("0.1 + 0.2").unwrap());
        let value = node.as_number().unwrap();
        assert_float_relative_eq!(value, 0.3);
    }

    #[test]
    fn unchanged_tree() {
        let node = parse("y = x^2 - 2x + 1").unwrap();
        let (simplified, changed) = simplify_step(&node);
        assert!(!changed);
        assert_eq!(simplified, node);
    }

    #[test]
    fn empty_tree() {
        assert_eq!(simplify_step(&Node::Empty), (Node::Empty, false));
    }

    #[test]
    fn one_rewrite_per_step() {
        let (node, _) = simplify_step(&parse("(2 + 3) * (4 + 5)").unwrap());
        assert_eq!(node.to_string(), "5 * (4 + 5)");

        let (node, _) = simplify_step(&node);
        assert_eq!(node.to_string(), "5 * 9");

        let (node, _) = simplify_step(&node);
        assert_eq!(node.to_string(), "45");
    }

    #[test]
    fn root_rules_before_recursion() {
        // the product is zero regardless of its left operand, which is never simplified
        let (node, _) = simplify_step(&parse("(x * 1) * 0").unwrap());
        assert_eq!(node, Node::Number(0.0));
    }

    #[test]
    fn left_before_right() {
        let (node, _) = simplify_step(&parse("(x + 0) - (y * 1)").unwrap());
        assert_eq!(node.to_string(), "x - y * 1");
    }

    #[test]
    fn recurses_into_calls_and_ratios() {
        let (node, _) = simplify_step(&parse("sin(x * 2)").unwrap());
        assert_eq!(node.to_string(), "sin(2 * x)");

        let (node, _) = simplify_step(&parse("x / (1 + 1)").unwrap());
        assert_eq!(node.to_string(), "x / 2");
    }

    #[test]
    fn collects_steps() {
        let mut steps: Vec<Step> = Vec::new();
        let mut node = parse("x * 1 + x").unwrap();
        loop {
            let (next, changed) = simplify_step_with(&node, &mut steps);
            if !changed {
                break;
            }
            node = next;
        }

        assert_eq!(steps, vec![Step::MultiplyOne, Step::CombineLikeTerms]);
        assert_eq!(node, Node::binary(BinOp::Mul, Node::Number(2.0), Node::Variable('x')));
    }

    #[test]
    fn counts_steps() {
        let mut count = 0usize;
        simplify_step_with(&parse("1 + 1").unwrap(), &mut count);
        simplify_step_with(&parse("x").unwrap(), &mut count);
        assert_eq!(count, 1);
    }

    #[test]
    fn full_simplification() {
        assert_eq!(simplify_fully("1/2 + 1/3"), "5 / 6");
        assert_eq!(simplify_fully("x * x * x"), "x ^ 3");
        assert_eq!(simplify_fully("2x * 3"), "6 * x");
        assert_eq!(simplify_fully("x^2 * x * 2"), "2 * x ^ 3");
        assert_eq!(simplify_fully("(x + 0) * (y - y) + 4"), "4");
        assert_eq!(simplify_fully("-2 + 3"), "1");
        assert_eq!(simplify_fully("y = 2 * (3 * x) + x"), "y = 7 * x");
    }

    #[test]
    fn zero_product_is_unsigned() {
        let source = parse("y = (0*-1)^2").unwrap();
        let (node, changed) = simplify_step(&source);
        assert!(changed);
        assert_eq!(node.as_markup().to_string(), "y = 0<sup>2</sup>");
        assert_eq!(node.to_string(), "y = 0 ^ 2");
        assert!(parse(&node.to_string()).unwrap().equivalent(&node));

        assert_eq!(simplify_fully("y = (0*-1)^2"), "y = 0");
    }

    #[test]
    fn markup_of_simplified_tree() {
        let (node, _) = simplify_step(&parse("x * x").unwrap());
        assert_eq!(node.as_markup().to_string(), "x<sup>2</sup>");
    }
}
