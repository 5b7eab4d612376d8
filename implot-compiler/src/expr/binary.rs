use crate::Compiler;
use implot_parser::node::{fmt::Side, Associativity, BinOp, Node, Precedence};
use super::{needs_parens, power};

/// Compiles `-operand`.
pub fn compile_negation(operand: &Node, compiler: &mut Compiler) {
    compiler.emit("-");
    compiler.emit_grouped(operand, needs_parens(operand, Precedence::Neg, Associativity::Left, Side::Right));
}

/// Compiles a binary operation.
///
/// An equation `lhs = rhs` compiles to `lhs - rhs`, which is zero on the curve and changes sign
/// across it.
pub fn compile_binary(op: BinOp, lhs: &Node, rhs: &Node, compiler: &mut Compiler) {
    let (op, separator) = match op {
        BinOp::Add => (BinOp::Add, " + "),
        BinOp::Sub | BinOp::Eq => (BinOp::Sub, " - "),
        BinOp::Mul => (BinOp::Mul, "*"),
        BinOp::Exp => return power::compile_power(lhs, rhs, compiler),
    };

    compiler.emit_grouped(lhs, needs_parens(lhs, op.precedence(), op.associativity(), Side::Left));
    compiler.emit(separator);
    compiler.emit_grouped(rhs, needs_parens(rhs, op.precedence(), op.associativity(), Side::Right));
}

/// Compiles `numerator/denominator`.
pub fn compile_ratio(numerator: &Node, denominator: &Node, compiler: &mut Compiler) {
    compiler.emit_grouped(
        numerator,
        needs_parens(numerator, Precedence::Factor, Associativity::Left, Side::Left),
    );
    compiler.emit("/");
    compiler.emit_grouped(
        denominator,
        needs_parens(denominator, Precedence::Factor, Associativity::Left, Side::Right),
    );
}
