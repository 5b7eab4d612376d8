use crate::{config::PipelineOptions, error::Error};
use implot_compiler::compile;
use implot_compute::{simplify_step_with, Step};
use implot_parser::{node::{fmt::Markup, BinOp}, parse, Node};
use log::info;
use serde::Serialize;

/// Everything produced by processing one expression.
#[derive(Debug, Serialize)]
pub struct Output {
    /// The rendering of the expression before simplification, followed by the rendering after
    /// each simplification step that changed it.
    pub renderings: Vec<String>,

    /// A description of the rule applied in each step.
    pub rules: Vec<String>,

    /// Whether simplification stopped because a step no longer changed the rendering, rather than
    /// because the iteration limit was reached.
    pub fixpoint: bool,

    /// The simplified tree.
    pub simplified: Node,

    /// The GLSL expression for the simplified tree.
    pub code: String,
}

impl Output {
    /// Returns the rendering of the expression before simplification.
    pub fn notation(&self) -> &str {
        self.renderings.first().map(String::as_str).unwrap_or_default()
    }

    /// Returns the rendering of the simplified expression.
    pub fn simplified_notation(&self) -> &str {
        self.renderings.last().map(String::as_str).unwrap_or_default()
    }
}

/// Turns the tree into an equation if it is not one already.
///
/// If `y` appears in the tree, it becomes `tree = 0`. Otherwise, it becomes `y = tree`.
pub fn complete_equation(node: Node) -> Node {
    match node {
        Node::Binary { op: BinOp::Eq, .. } | Node::Empty => node,
        node if node.contains_variable('y') => Node::binary(BinOp::Eq, node, Node::Number(0.0)),
        node => Node::binary(BinOp::Eq, Node::Variable('y'), node),
    }
}

/// Parses, simplifies and compiles the given source.
pub fn run(source: &str, options: &PipelineOptions) -> Result<Output, Error> {
    let mut node = parse(source)?;
    if options.complete_equations {
        node = complete_equation(node);
    }
    info!("parsed `{}`", node);

    let mut renderings = vec![node.as_markup().to_string()];
    let mut steps: Vec<Step> = Vec::new();
    let mut fixpoint = false;
    for _ in 0..options.max_iterations {
        let (next, _) = simplify_step_with(&node, &mut steps);
        let rendering = next.as_markup().to_string();
        node = next;

        if renderings.last() == Some(&rendering) {
            fixpoint = true;
            break;
        }
        renderings.push(rendering);
    }
    info!("simplified to `{}` in {} step(s)", node, steps.len());
    if !fixpoint {
        info!("stopped after {} iteration(s) without reaching a fixpoint", options.max_iterations);
    }

    let code = compile(&node);
    info!("compiled to `{}`", code);

    Ok(Output {
        renderings,
        rules: steps.iter().map(Step::to_string).collect(),
        fixpoint,
        simplified: node,
        code,
    })
}

#[cfg(test)]
mod tests {
    use implot_parser::parser::error::kind::UnbalancedParentheses;
    use pretty_assertions::assert_eq;
    use super::*;

    fn run_default(source: &str) -> Output {
        run(source, &PipelineOptions::default()).unwrap()
    }

    #[test]
    fn irreducible_equation() {
        let output = run_default("y=x^2-2x+1");
        assert_eq!(output.notation(), "y = x<sup>2</sup> - 2x + 1");
        assert_eq!(output.renderings.len(), 1);
        assert!(output.rules.is_empty());
        assert!(output.fixpoint);
        assert_eq!(output.code, "y - (x*x - 2.0*x + 1.0)");
    }

    #[test]
    fn fixpoint_is_stable() {
        let options = PipelineOptions::default();
        let output = run("y=x^2-2x+1", &options).unwrap();
        let again = run(&output.simplified.to_string(), &options).unwrap();
        assert_eq!(again.simplified_notation(), output.simplified_notation());
        assert!(again.fixpoint);
    }

    #[test]
    fn simplifies() {
        let output = run_default("y = 2x + 3x");
        assert_eq!(output.renderings, vec!["y = 2x + 3x", "y = 5x"]);
        assert_eq!(output.rules, vec!["combine like terms"]);
        assert!(output.fixpoint);
        assert_eq!(output.code, "y - 5.0*x");
    }

    #[test]
    fn completes_equations() {
        let output = run_default("x^2");
        assert_eq!(output.notation(), "y = x<sup>2</sup>");
        assert_eq!(output.code, "y - x*x");

        let output = run_default("x + y");
        assert_eq!(output.notation(), "x + y = 0");
        assert_eq!(output.code, "x + y - 0.0");
    }

    #[test]
    fn completion_can_be_disabled() {
        let options = PipelineOptions { complete_equations: false, ..Default::default() };
        let output = run("x^2", &options).unwrap();
        assert_eq!(output.notation(), "x<sup>2</sup>");
        assert_eq!(output.code, "x*x");
    }

    #[test]
    fn iteration_limit() {
        let options = PipelineOptions { max_iterations: 1, ..Default::default() };
        let output = run("y = (1 + 2) + (3 + 4)", &options).unwrap();
        assert_eq!(output.renderings, vec!["y = 1 + 2 + (3 + 4)", "y = 3 + (3 + 4)"]);
        assert!(!output.fixpoint);

        let output = run_default("y = (1 + 2) + (3 + 4)");
        assert_eq!(output.simplified_notation(), "y = 10");
        assert!(output.fixpoint);
    }

    #[test]
    fn empty_input() {
        let output = run_default("  ");
        assert_eq!(output.notation(), "");
        assert_eq!(output.code, "");
        assert_eq!(output.simplified, Node::Empty);
        assert!(output.fixpoint);
    }

    #[test]
    fn parse_errors() {
        let err = run("(x + 1", &PipelineOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse(ref err) if err.is::<UnbalancedParentheses>()));
    }

    #[test]
    fn serializes() {
        let output = run_default("y = x + x");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["code"], "y - 2.0*x");
        assert_eq!(json["fixpoint"], true);
        assert_eq!(json["renderings"][1], "y = 2x");
    }
}
