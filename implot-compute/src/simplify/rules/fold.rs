//! Constant folding: evaluating operations whose operands are all numbers.

use crate::step_collector::StepCollector;
use implot_parser::node::{BinOp, Node};
use super::{do_binary, do_ratio};
use crate::simplify::step::Step;

/// The largest magnitude at which every integer is exactly representable as an [`f64`].
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns the number as an [`i64`] if it is an integer that `f64` represents exactly.
fn as_integer(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

/// Returns the greatest common divisor of `a` and `b`.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `2+3 = 5`
/// `2*3 = 6`
/// `2^3 = 8`
///
/// Declined if the result is not finite. Equations are never folded.
pub fn fold_binary(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary { op, lhs, rhs } = node else {
        return None;
    };
    let (a, b) = (lhs.as_number()?, rhs.as_number()?);

    let result = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Exp => a.powf(b),
        BinOp::Eq => return None,
    };

    if !result.is_finite() {
        return None;
    }

    step_collector.push(Step::FoldConstants);
    Some(Node::number(result))
}

/// Reduces a ratio of two numbers.
///
/// `6/4 = 3/2`
/// `3/-6 = -1/2`
/// `8/4 = 2`
/// `0.5/2 = 0.25`
///
/// A ratio of two integers is divided through by their greatest common divisor, with the sign
/// moved to the numerator, and becomes a plain number if the denominator is then `1`. Any other
/// ratio of two numbers is evaluated. Division by zero is never folded.
pub fn reduce_ratio(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_ratio(node, |numerator, denominator| {
        let (n, d) = (numerator.as_number()?, denominator.as_number()?);
        if d == 0.0 {
            return None;
        }

        match (as_integer(n), as_integer(d)) {
            (Some(n), Some(d)) => {
                let divisor = gcd(n.unsigned_abs(), d.unsigned_abs()) as i64;
                let sign = if d < 0 { -1 } else { 1 };
                let (new_n, new_d) = (sign * n / divisor, sign * d / divisor);

                if new_d == 1 {
                    Some(Node::Number(new_n as f64))
                } else if (new_n, new_d) == (n, d) {
                    None
                } else {
                    Some(Node::ratio(Node::Number(new_n as f64), Node::Number(new_d as f64)))
                }
            },
            _ => {
                let quotient = n / d;
                quotient.is_finite().then_some(Node::number(quotient))
            },
        }
    })?;

    step_collector.push(Step::ReduceRatio);
    Some(opt)
}

/// `2*(3*a) = 6*a`
pub fn fold_coefficients(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOp::Mul, |lhs, rhs| {
        let outer = lhs.as_number()?;
        let Node::Binary { op: BinOp::Mul, lhs: inner, rhs: rest } = rhs else {
            return None;
        };
        let product = outer * inner.as_number()?;

        product.is_finite()
            .then(|| Node::binary(BinOp::Mul, Node::number(product), (**rest).clone()))
    })?;

    step_collector.push(Step::FoldCoefficients);
    Some(opt)
}

/// Applies all constant folding rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold_binary(node, step_collector)
        .or_else(|| reduce_ratio(node, step_collector))
        .or_else(|| fold_coefficients(node, step_collector))
}
