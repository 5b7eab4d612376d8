use crate::Compiler;
use implot_parser::node::{PI, THETA};

/// Compiles a number as a GLSL float literal.
pub fn compile_number(n: f64, compiler: &mut Compiler) {
    // the debug format always includes a decimal point or an exponent: `2.0`, `1e16`
    compiler.emit(&format!("{:?}", n));
}

/// Compiles a variable. The constants `π` and `θ` are replaced by their values.
pub fn compile_variable(name: char, compiler: &mut Compiler) {
    match name {
        PI => compile_number(std::f64::consts::PI, compiler),
        THETA => compiler.emit("atan(y, x)"),
        name => compiler.emit(name.encode_utf8(&mut [0; 4])),
    }
}
