use crate::{Compile, Compiler};
use implot_parser::node::{fmt::Side, Associativity, Node, Precedence};
use super::{literal::compile_number, needs_parens};

/// The largest magnitude of an integer exponent that is written out as repeated multiplication.
const MAX_UNROLLED: f64 = 6.0;

/// The way a power is written in GLSL.
///
/// `pow(x, y)` is undefined for `x < 0`, so it is only ever called with `abs(x)`. That is exact
/// for even integer exponents. Odd integer exponents restore the sign by multiplying by the base
/// once more. For any other exponent, the sign of a negative base is lost.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Form {
    /// `x^0`: `1.0`.
    One,

    /// `x^n` for `1 <= n <= 6`: `x*x*...*x`.
    Product(u32),

    /// `x^-n` for `1 <= n <= 6`: `1.0/(x*x*...*x)`.
    Reciprocal(u32),

    /// `x^n` for odd `n > 6`: `pow(abs(x), n - 1) * x`. Holds `n - 1`.
    OddPow(f64),

    /// `x^y` otherwise: `pow(abs(x), y)`.
    Pow,
}

impl Form {
    /// Returns the form used to compile a power with the given exponent.
    fn of(exponent: &Node) -> Self {
        let Some(n) = exponent.as_number().filter(|n| n.fract() == 0.0) else {
            return Self::Pow;
        };

        if n == 0.0 {
            Self::One
        } else if (1.0..=MAX_UNROLLED).contains(&n) {
            Self::Product(n as u32)
        } else if (-MAX_UNROLLED..=-1.0).contains(&n) {
            Self::Reciprocal(-n as u32)
        } else if n > MAX_UNROLLED && n % 2.0 != 0.0 {
            Self::OddPow(n - 1.0)
        } else {
            Self::Pow
        }
    }
}

/// Returns the precedence of the code generated for a power with the given exponent.
pub fn precedence(exponent: &Node) -> Option<Precedence> {
    match Form::of(exponent) {
        Form::One | Form::Pow => None,
        Form::Product(_) | Form::Reciprocal(_) | Form::OddPow(_) => Some(Precedence::Factor),
    }
}

/// Compiles one factor of a product, grouping it if needed.
fn compile_factor(base: &Node, compiler: &mut Compiler) {
    compiler.emit_grouped(base, needs_parens(base, Precedence::Factor, Associativity::Left, Side::Right));
}

/// Compiles `base*base*...*base`, with `count` factors.
fn compile_product(base: &Node, count: u32, compiler: &mut Compiler) {
    for i in 0..count {
        if i > 0 {
            compiler.emit("*");
        }
        compile_factor(base, compiler);
    }
}

/// Compiles `pow(abs(base), exponent)`.
fn compile_pow(base: &Node, exponent: impl Compile, compiler: &mut Compiler) {
    compiler.emit("pow(abs(");
    base.compile(compiler);
    compiler.emit("), ");
    exponent.compile(compiler);
    compiler.emit(")");
}

/// A number literal, compiled through [`compile_number`].
struct Literal(f64);

impl Compile for Literal {
    fn compile(&self, compiler: &mut Compiler) {
        compile_number(self.0, compiler);
    }
}

/// Compiles `base^exponent`.
pub fn compile_power(base: &Node, exponent: &Node, compiler: &mut Compiler) {
    match Form::of(exponent) {
        Form::One => compiler.emit("1.0"),
        Form::Product(count) => compile_product(base, count, compiler),
        Form::Reciprocal(count) => {
            compiler.emit("1.0/(");
            compile_product(base, count, compiler);
            compiler.emit(")");
        },
        Form::OddPow(even) => {
            compile_pow(base, Literal(even), compiler);
            compiler.emit(" * ");
            compile_factor(base, compiler);
        },
        Form::Pow => compile_pow(base, exponent, compiler),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn forms() {
        assert_eq!(Form::of(&Node::Number(0.0)), Form::One);
        assert_eq!(Form::of(&Node::Number(4.0)), Form::Product(4));
        assert_eq!(Form::of(&Node::Number(-3.0)), Form::Reciprocal(3));
        assert_eq!(Form::of(&Node::Number(9.0)), Form::OddPow(8.0));
        assert_eq!(Form::of(&Node::Number(10.0)), Form::Pow);
        assert_eq!(Form::of(&Node::Number(2.5)), Form::Pow);
        assert_eq!(Form::of(&Node::Variable('y')), Form::Pow);
    }
}
