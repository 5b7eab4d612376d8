//! The tree representation of a parsed expression or equation.
//!
//! A [`Node`] is a closed sum type: every stage of the pipeline (the simplifier, the notation
//! renderer and the code renderer) is a `match` over its variants. Trees are owned outright, so
//! a rewrite always builds a new subtree from clones of the old one and drops what it replaced.
//!
//! # Equivalence
//!
//! Two trees can describe the same expression while having different shapes, such as `a + b` and
//! `b + a`. Deciding whether two expressions are mathematically equal in general requires
//! simplifying them first, which is exactly what we are trying to do, so the simplifier relies on
//! a much weaker, purely structural notion instead: **commutative equivalence**.
//!
//! Two trees are commutatively equivalent (see [`Node::equivalent`]) if:
//!
//! - They are structurally equal, or
//! - They are both applications of the same symmetric operator (`+`, `*` or `=`), and the
//! operands of one are the operands of the other in swapped order, or
//! - They are the same variant and their children are pairwise equivalent.
//!
//! `-` and `/` are never symmetric, so `a - b` is only equivalent to `b - a` when `a` and `b` are
//! themselves equivalent. Equivalence never reports false positives: equivalent trees always
//! evaluate to the same value.

pub mod fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
///
/// The numeric values leave a gap at `1` and are compared as plain integers, so that an operator
/// can bind one step tighter than its own precedence (see [`Precedence::tighter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
    /// Precedence of the equals sign (`=`), which separates the sides of an equation.
    Equation = 0,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 2,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 3,

    /// Precedence of prefix negation (`-`).
    Neg = 4,

    /// Precedence of exponentiation (`^`).
    Exp = 5,
}

impl Precedence {
    /// Returns the numeric value of this precedence.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the numeric value of this precedence, incremented by one.
    ///
    /// This is used wherever an operand on one side of an operator must bind strictly tighter
    /// than the operator itself, such as the left operand of `^` or the right operand of `-`.
    pub fn tighter(self) -> u8 {
        self as u8 + 1
    }
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// A binary operator that can appear in a [`Node::Binary`].
///
/// Division is not a [`BinOp`]; it is represented by its own variant, [`Node::Ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Exp,
    Eq,
}

impl BinOp {
    /// Returns the symbol used to write this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Exp => "^",
            Self::Eq => "=",
        }
    }

    /// Returns the precedence of the operator.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Eq => Precedence::Equation,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Eq => Associativity::Left,
        }
    }

    /// Returns true if swapping the operands of this operator never changes the result.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Eq)
    }
}

/// A function from the fixed registry of functions that can be called in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Abs,
    Floor,
    Ceil,
}

impl Func {
    /// Every function in the registry.
    pub const ALL: [Func; 6] = [Func::Sin, Func::Cos, Func::Tan, Func::Abs, Func::Floor, Func::Ceil];

    /// Returns the name of the function, which is also its name in GLSL.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }

    /// Looks up a function by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The name used for the constant `pi` once it has been parsed.
pub const PI: char = 'π';

/// The name used for the constant `theta` once it has been parsed.
pub const THETA: char = 'θ';

/// A node in an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric literal, such as `2` or `0.5`.
    Number(f64),

    /// A single-letter variable, such as `x`, or one of the constants [`PI`] and [`THETA`].
    Variable(char),

    /// A call to a function from the registry, such as `sin(x)`.
    Call {
        func: Func,
        arg: Box<Node>,
    },

    /// A binary operation, such as `x + 1` or `y = x^2`.
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// A division, such as `1 / x`.
    Ratio {
        numerator: Box<Node>,
        denominator: Box<Node>,
    },

    /// The expression parsed from an input that contains no tokens at all.
    Empty,
}

impl Node {
    /// Creates a [`Node::Number`] node. Negative zero becomes zero, so that it is never written
    /// as `-0`.
    pub fn number(n: f64) -> Self {
        Self::Number(if n == 0.0 { 0.0 } else { n })
    }

    /// Creates a [`Node::Binary`] node.
    pub fn binary(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Self::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Creates a [`Node::Ratio`] node.
    pub fn ratio(numerator: Node, denominator: Node) -> Self {
        Self::Ratio { numerator: Box::new(numerator), denominator: Box::new(denominator) }
    }

    /// Creates a [`Node::Call`] node.
    pub fn call(func: Func, arg: Node) -> Self {
        Self::Call { func, arg: Box::new(arg) }
    }

    /// Creates the negation of the given node, `-1 * node`.
    pub fn neg(node: Node) -> Self {
        Self::binary(BinOp::Mul, Self::Number(-1.0), node)
    }

    /// Returns the value of the node if it is a [`Node::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// If the node is a negation, `-1 * operand`, returns the negated operand.
    ///
    /// A product of `-1` and a number is not a negation; it is written out as `-1 * n`, so that
    /// folding it into a single number visibly changes the expression.
    pub fn as_negation(&self) -> Option<&Node> {
        match self {
            Self::Binary { op: BinOp::Mul, lhs, rhs }
                if **lhs == Self::Number(-1.0) && !rhs.is_number() => Some(rhs),
            _ => None,
        }
    }

    /// Returns the precedence of the operation at the root of this node, or [`None`] if the node
    /// is a leaf or a function call, which never need to be grouped.
    ///
    /// Negations and negative literals are written with a leading `-`, so they report
    /// [`Precedence::Neg`] rather than the precedence of multiplication.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Number(n) if n.is_sign_negative() => Some(Precedence::Neg),
            Self::Binary { .. } if self.as_negation().is_some() => Some(Precedence::Neg),
            Self::Binary { op, .. } => Some(op.precedence()),
            Self::Ratio { .. } => Some(Precedence::Factor),
            _ => None,
        }
    }

    /// Returns true if the variable with the given name appears anywhere in this node.
    pub fn contains_variable(&self, name: char) -> bool {
        match self {
            Self::Variable(var) => *var == name,
            Self::Call { arg, .. } => arg.contains_variable(name),
            Self::Binary { lhs, rhs, .. } => lhs.contains_variable(name) || rhs.contains_variable(name),
            Self::Ratio { numerator, denominator } => {
                numerator.contains_variable(name) || denominator.contains_variable(name)
            },
            Self::Number(_) | Self::Empty => false,
        }
    }

    /// Returns true if this node and `other` are commutatively equivalent.
    ///
    /// See the [module-level documentation](self) for the exact definition.
    pub fn equivalent(&self, other: &Node) -> bool {
        match (self, other) {
            (
                Self::Binary { op: op_a, lhs: lhs_a, rhs: rhs_a },
                Self::Binary { op: op_b, lhs: lhs_b, rhs: rhs_b },
            ) if op_a == op_b => {
                (lhs_a.equivalent(lhs_b) && rhs_a.equivalent(rhs_b))
                    || (op_a.is_symmetric() && lhs_a.equivalent(rhs_b) && rhs_a.equivalent(lhs_b))
            },
            (
                Self::Ratio { numerator: num_a, denominator: den_a },
                Self::Ratio { numerator: num_b, denominator: den_b },
            ) => num_a.equivalent(num_b) && den_a.equivalent(den_b),
            (
                Self::Call { func: func_a, arg: arg_a },
                Self::Call { func: func_b, arg: arg_b },
            ) => func_a == func_b && arg_a.equivalent(arg_b),
            _ => self == other,
        }
    }
}
