//! Human-readable renderings of a [`Node`].
//!
//! There are two: the plain infix rendering given by [`Display`], which can always be parsed back
//! into an equivalent tree, and the markup rendering given by [`Markup`], which is meant for
//! display on a web page. Both parenthesize children the same way (see [`needs_parens`]).

use std::fmt::{Display, Formatter, Result};
use super::{Associativity, BinOp, Node, Precedence};

/// The side of a binary operator that an operand appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Returns true if `child`, appearing on the given `side` of an operator with the given
/// precedence and associativity, must be wrapped in parentheses to keep its meaning.
///
/// A child is grouped if its own precedence is strictly lower than the operator's. On the side
/// opposite to the operator's associativity (the left of `^`, the right of `-`), the operator's
/// precedence is incremented first, so that `(x^2)^3` and `a - (b - c)` keep their parentheses.
pub fn needs_parens(child: &Node, precedence: Precedence, associativity: Associativity, side: Side) -> bool {
    precedence_needs_parens(child.precedence(), precedence, associativity, side)
}

/// Like [`needs_parens`], but for a child whose precedence has already been determined.
///
/// Renderers that write a node differently than [`Display`] does (and so give it a different
/// precedence) use this directly.
pub fn precedence_needs_parens(
    child_precedence: Option<Precedence>,
    precedence: Precedence,
    associativity: Associativity,
    side: Side,
) -> bool {
    let Some(child_precedence) = child_precedence else {
        return false;
    };

    let threshold = match (associativity, side) {
        (Associativity::Right, Side::Left) | (Associativity::Left, Side::Right) => precedence.tighter(),
        _ => precedence.value(),
    };
    child_precedence.value() < threshold
}

/// Returns true if the operand of a negation must be wrapped in parentheses.
pub fn negation_needs_parens(operand: &Node) -> bool {
    needs_parens(operand, Precedence::Neg, Associativity::Left, Side::Right)
}

/// Returns true if the given operand of `op` must be wrapped in parentheses.
pub fn operand_needs_parens(op: BinOp, operand: &Node, side: Side) -> bool {
    needs_parens(operand, op.precedence(), op.associativity(), side)
}

/// Formats `child` with the given function, wrapping it in parentheses if `grouped` is true.
fn fmt_grouped(
    f: &mut Formatter,
    child: &Node,
    grouped: bool,
    fmt_child: impl Fn(&Node, &mut Formatter) -> Result,
) -> Result {
    if grouped {
        write!(f, "(")?;
        fmt_child(child, f)?;
        write!(f, ")")
    } else {
        fmt_child(child, f)
    }
}

/// A trait for types that can be formatted as markup.
pub trait Markup {
    /// Format the value as markup.
    fn fmt_markup(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`MarkupFormatter`], which implements [`Display`].
    fn as_markup(&self) -> MarkupFormatter<'_, Self> {
        MarkupFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Markup`].
pub struct MarkupFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for MarkupFormatter<'_, T>
where
    T: Markup,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_markup(f)
    }
}

/// Returns the separator to write between the operands of a product in markup.
///
/// The separator is chosen by walking down the left chain of the right operand, looking for the
/// first thing that will be written: a variable, a fraction or a group reads fine directly after
/// the left operand (`2x`), a function name needs a space to stay legible (`2 sin(x)`), and a
/// number needs an explicit operator (`2 * 3`).
fn product_separator(rhs: &Node) -> &'static str {
    if operand_needs_parens(BinOp::Mul, rhs, Side::Right) {
        return "";
    }

    let mut node = rhs;
    loop {
        match node {
            Node::Variable(_) | Node::Ratio { .. } => return "",
            Node::Call { .. } => return " ",
            Node::Binary { .. } if node.as_negation().is_some() => return " * ",
            Node::Binary { op, lhs, .. } => {
                if operand_needs_parens(*op, lhs, Side::Left) {
                    return "";
                }
                node = lhs;
            },
            Node::Number(_) | Node::Empty => return " * ",
        }
    }
}

impl Markup for Node {
    fn fmt_markup(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Call { func, arg } => {
                write!(f, "{}(", func)?;
                arg.fmt_markup(f)?;
                write!(f, ")")
            },
            Node::Binary { .. } if self.as_negation().is_some() => {
                let operand = self.as_negation().unwrap_or(self);
                write!(f, "-")?;
                fmt_grouped(f, operand, negation_needs_parens(operand), Node::fmt_markup)
            },
            Node::Binary { op: BinOp::Exp, lhs, rhs } => {
                fmt_grouped(f, lhs, operand_needs_parens(BinOp::Exp, lhs, Side::Left), Node::fmt_markup)?;
                write!(f, "<sup>")?;
                rhs.fmt_markup(f)?;
                write!(f, "</sup>")
            },
            Node::Binary { op: BinOp::Mul, lhs, rhs } => {
                fmt_grouped(f, lhs, operand_needs_parens(BinOp::Mul, lhs, Side::Left), Node::fmt_markup)?;
                write!(f, "{}", product_separator(rhs))?;
                fmt_grouped(f, rhs, operand_needs_parens(BinOp::Mul, rhs, Side::Right), Node::fmt_markup)
            },
            Node::Binary { op, lhs, rhs } => {
                fmt_grouped(f, lhs, operand_needs_parens(*op, lhs, Side::Left), Node::fmt_markup)?;
                write!(f, " {} ", op.symbol())?;
                fmt_grouped(f, rhs, operand_needs_parens(*op, rhs, Side::Right), Node::fmt_markup)
            },
            Node::Ratio { numerator, denominator } => {
                write!(f, "<div class=\"ratio\"><span>")?;
                numerator.fmt_markup(f)?;
                write!(f, "</span><span>")?;
                denominator.fmt_markup(f)?;
                write!(f, "</span></div>")
            },
            Node::Empty => Ok(()),
        }
    }
}

/// Formats the node as plain infix text that the parser accepts.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Call { func, arg } => write!(f, "{}({})", func, arg),
            Node::Binary { .. } if self.as_negation().is_some() => {
                let operand = self.as_negation().unwrap_or(self);
                write!(f, "-")?;
                fmt_grouped(f, operand, negation_needs_parens(operand), Node::fmt)
            },
            Node::Binary { op, lhs, rhs } => {
                fmt_grouped(f, lhs, operand_needs_parens(*op, lhs, Side::Left), Node::fmt)?;
                write!(f, " {} ", op.symbol())?;
                fmt_grouped(f, rhs, operand_needs_parens(*op, rhs, Side::Right), Node::fmt)
            },
            Node::Ratio { numerator, denominator } => {
                let ratio = |side| needs_parens(
                    if side == Side::Left { numerator } else { denominator },
                    Precedence::Factor,
                    Associativity::Left,
                    side,
                );
                fmt_grouped(f, numerator, ratio(Side::Left), Node::fmt)?;
                write!(f, " / ")?;
                fmt_grouped(f, denominator, ratio(Side::Right), Node::fmt)
            },
            Node::Empty => Ok(()),
        }
    }
}
