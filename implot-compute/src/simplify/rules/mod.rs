//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify as an argument, and
//! returns `Some(node)` with the rewritten node if the rule applies, or `None` if the rule does
//! not apply. Rules only ever look at the node they are given and its direct descendants; the
//! simplifier is responsible for walking the tree.

pub mod fold;
pub mod identity;
pub mod order;
pub mod power;
pub mod ratio;
pub mod terms;

use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::step::Step;

/// If the node is a binary operation with the given operator, calls the given transformation
/// function with the left and right-hand-side of the operation.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_binary(
    node: &Node,
    op: BinOp,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match node {
        Node::Binary { op: target, lhs, rhs } if *target == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the node is a ratio, calls the given transformation function with the numerator and
/// denominator.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_ratio(node: &Node, f: impl Fn(&Node, &Node) -> Option<Node>) -> Option<Node> {
    match node {
        Node::Ratio { numerator, denominator } => f(numerator, denominator),
        _ => None,
    }
}

/// Returns true if the node is the number `n`.
pub(crate) fn is_number(node: &Node, n: f64) -> bool {
    node.as_number() == Some(n)
}

/// Applies all rules, in priority order.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold::all(node, step_collector)
        .or_else(|| identity::all(node, step_collector))
        .or_else(|| ratio::all(node, step_collector))
        .or_else(|| power::all(node, step_collector))
        .or_else(|| terms::all(node, step_collector))
        .or_else(|| order::all(node, step_collector))
}
