//! Code generation for implot: turns a [`Node`] tree into a GLSL ES expression.
//!
//! The generated expression refers to the free variables `x` and `y`, and is meant to be the body
//! of a function like `float getSample(float x, float y)` in a fragment shader. For an equation,
//! the expression changes sign wherever the curve passes, which is how the shader in [`shader`]
//! decides which pixels to colour.
//!
//! GLSL is stricter than the notation it is generated from:
//!
//! - There is no implicit conversion from `int` to `float`, so every number literal is written
//!   with a decimal point or an exponent (`2` becomes `2.0`).
//! - `pow(x, y)` is undefined for `x < 0`, so small integer powers are written out as repeated
//!   multiplication, and other powers are taken of `abs(x)`. See [`expr`] for the details.
//!
//! ```
//! use implot_compiler::compile;
//! use implot_parser::parse;
//!
//! let node = parse("y = x^2 - 2x + 1").unwrap();
//! assert_eq!(compile(&node), "y - (x*x - 2.0*x + 1.0)");
//! ```

pub mod expr;
pub mod shader;

use implot_parser::node::Node;
use log::trace;

/// The state of the compiler: the code generated so far.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    code: String,
}

impl Compiler {
    /// Creates a compiler with no generated code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles the given expression into a new [`Compiler`].
    pub fn compile<T: Compile>(expr: T) -> Self {
        let mut compiler = Self::new();
        expr.compile(&mut compiler);
        compiler
    }

    /// Appends a fragment of code.
    pub fn emit(&mut self, fragment: &str) {
        self.code.push_str(fragment);
    }

    /// Compiles the given expression, wrapping it in parentheses if `grouped` is true.
    pub fn emit_grouped<T: Compile>(&mut self, expr: T, grouped: bool) {
        if grouped {
            self.emit("(");
            expr.compile(self);
            self.emit(")");
        } else {
            expr.compile(self);
        }
    }

    /// Returns the code generated so far.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Consumes the compiler, returning the generated code.
    pub fn into_code(self) -> String {
        self.code
    }
}

/// Any type that can be compiled into GLSL.
pub trait Compile {
    /// Appends the GLSL for the type to the compiler's output.
    fn compile(&self, compiler: &mut Compiler);
}

impl<T: Compile> Compile for &T {
    fn compile(&self, compiler: &mut Compiler) {
        (*self).compile(compiler)
    }
}

/// Compiles the tree into a single-line GLSL ES expression.
///
/// [`Node::Empty`] compiles to the empty string.
pub fn compile(node: &Node) -> String {
    let code = Compiler::compile(node).into_code();
    trace!("compiled `{}` as `{}`", node, code);
    code
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use implot_compute::simplify_step;
    use implot_parser::parse;

    /// Parses and compiles the given source.
    fn compile_source(source: &str) -> String {
        compile(&parse(source).unwrap())
    }

    #[test]
    fn literals() {
        assert_eq!(compile_source("2"), "2.0");
        assert_eq!(compile_source("0.5"), "0.5");
        assert_eq!(compile_source(".25"), "0.25");
        assert_eq!(compile_source("-2"), "-2.0");
        assert_eq!(compile_source("10000000000000000"), "1e16");
    }

    #[test]
    fn variables_and_constants() {
        assert_eq!(compile_source("x"), "x");
        assert_eq!(compile_source("pi"), "3.141592653589793");
        assert_eq!(compile_source("theta"), "atan(y, x)");
        assert_eq!(compile_source("2π"), "2.0*3.141592653589793");
    }

    #[test]
    fn calls() {
        assert_eq!(compile_source("sin(2x)"), "sin(2.0*x)");
        assert_eq!(compile_source("abs(x - 1)"), "abs(x - 1.0)");
        assert_eq!(compile_source("floor(x)ceil(y)"), "floor(x)*ceil(y)");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(compile_source("x^2 - 2x + 1"), "x*x - 2.0*x + 1.0");
        assert_eq!(compile_source("2(x + 1)"), "2.0*(x + 1.0)");
        assert_eq!(compile_source("x - (y - 1)"), "x - (y - 1.0)");
        assert_eq!(compile_source("(x - y) - 1"), "x - y - 1.0");
        assert_eq!(compile_source("x / (2y)"), "x/(2.0*y)");
        assert_eq!(compile_source("(x + 1) / y"), "(x + 1.0)/y");
    }

    #[test]
    fn negation() {
        assert_eq!(compile_source("-x"), "-x");
        assert_eq!(compile_source("-(x + 1)"), "-(x + 1.0)");
        assert_eq!(compile_source("-x^2"), "-(x*x)");
        assert_eq!(compile_source("2 * -x"), "2.0*-x");
    }

    #[test]
    fn equation() {
        assert_eq!(compile_source("y = x^2"), "y - x*x");
        assert_eq!(compile_source("y = x + 1"), "y - (x + 1.0)");
        assert_eq!(compile_source("x + y = 1"), "x + y - 1.0");
    }

    #[test]
    fn small_powers_unroll() {
        assert_eq!(compile_source("x^3"), "x*x*x");
        assert_eq!(compile_source("x^2"), "x*x");
        assert_eq!(compile_source("x^1"), "x");
        assert_eq!(compile_source("x^0"), "1.0");
        assert_eq!(compile_source("x^6"), "x*x*x*x*x*x");
        assert_eq!(compile_source("(x + 1)^2"), "(x + 1.0)*(x + 1.0)");
        assert_eq!(compile_source("(x^2)^2"), "(x*x)*(x*x)");
        assert_eq!(compile_source("2x^2"), "2.0*(x*x)");
    }

    #[test]
    fn negative_powers_unroll() {
        assert_eq!(compile_source("x^-1"), "1.0/(x)");
        assert_eq!(compile_source("x^-2"), "1.0/(x*x)");
    }

    #[test]
    fn large_powers() {
        assert_eq!(compile_source("x^7"), "pow(abs(x), 6.0) * x");
        assert_eq!(compile_source("x^8"), "pow(abs(x), 8.0)");
        assert_eq!(compile_source("(x - 1)^9"), "pow(abs(x - 1.0), 8.0) * (x - 1.0)");
        assert_eq!(compile_source("x^-7"), "pow(abs(x), -7.0)");
    }

    #[test]
    fn other_powers() {
        assert_eq!(compile_source("x^0.5"), "pow(abs(x), 0.5)");
        assert_eq!(compile_source("x^y"), "pow(abs(x), y)");
        assert_eq!(compile_source("x^(1/2)"), "pow(abs(x), 1.0/2.0)");
        assert_eq!(compile_source("2^x * 3"), "pow(abs(2.0), x)*3.0");
    }

    #[test]
    fn empty() {
        assert_eq!(compile(&Node::Empty), "");
        assert_eq!(compile_source("   "), "");
    }

    #[test]
    fn simplified_tree() {
        let mut node = parse("x * x * x").unwrap();
        loop {
            let (next, changed) = simplify_step(&node);
            if !changed {
                break;
            }
            node = next;
        }
        assert_eq!(compile(&node), "x*x*x");
    }

    #[test]
    fn compiler_accumulates() {
        let mut compiler = Compiler::new();
        compiler.emit("return ");
        parse("x + y").unwrap().compile(&mut compiler);
        compiler.emit(";");
        assert_eq!(compiler.code(), "return x + y;");
    }
}
