use crate::{Compile, Compiler};
use implot_parser::node::{Func, Node};

/// Compiles a function call. Every function in [`Func`] is a GLSL built-in of the same name.
pub fn compile_call(func: Func, arg: &Node, compiler: &mut Compiler) {
    compiler.emit(func.name());
    compiler.emit("(");
    arg.compile(compiler);
    compiler.emit(")");
}
