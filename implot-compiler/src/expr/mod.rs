//! Compilation of each kind of [`Node`].
//!
//! Operands are parenthesized by the same rule as the notation (see
//! [`needs_parens`](implot_parser::node::fmt::needs_parens)), except that the precedence of a
//! power is the precedence of the code it compiles to: `x^2` is written `x*x`, which is a product
//! and must be grouped in `-(x*x)`.

mod binary;
mod call;
mod literal;
mod power;

use crate::{Compile, Compiler};
use implot_parser::node::{
    fmt::{precedence_needs_parens, Side},
    Associativity,
    BinOp,
    Node,
    Precedence,
};

/// Returns the precedence of the code generated for the node.
fn code_precedence(node: &Node) -> Option<Precedence> {
    match node {
        Node::Binary { op: BinOp::Exp, rhs, .. } => power::precedence(rhs),
        // equations compile to a subtraction
        Node::Binary { op: BinOp::Eq, .. } => Some(Precedence::Term),
        node => node.precedence(),
    }
}

/// Returns true if the code for `child` must be grouped when it appears on the given `side` of an
/// operation with the given precedence and associativity.
fn needs_parens(child: &Node, precedence: Precedence, associativity: Associativity, side: Side) -> bool {
    precedence_needs_parens(code_precedence(child), precedence, associativity, side)
}

impl Compile for Node {
    fn compile(&self, compiler: &mut Compiler) {
        match self {
            Node::Number(n) => literal::compile_number(*n, compiler),
            Node::Variable(name) => literal::compile_variable(*name, compiler),
            Node::Call { func, arg } => call::compile_call(*func, arg, compiler),
            Node::Binary { op, lhs, rhs } => match self.as_negation() {
                Some(operand) => binary::compile_negation(operand, compiler),
                None => binary::compile_binary(*op, lhs, rhs, compiler),
            },
            Node::Ratio { numerator, denominator } => binary::compile_ratio(numerator, denominator, compiler),
            Node::Empty => {},
        }
    }
}
