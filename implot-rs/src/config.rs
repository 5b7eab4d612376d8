use clap::ValueEnum;

/// What to print for each processed expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The markup rendering of the simplified expression.
    #[default]
    Notation,

    /// The GLSL expression for the simplified expression.
    Code,

    /// A complete fragment shader that plots the simplified expression.
    Shader,

    /// Everything the pipeline produced, as JSON.
    Json,
}

/// Options that control how an expression is processed and printed.
#[derive(Clone, Copy, Debug)]
pub struct PipelineOptions {
    /// The maximum number of simplification steps to take before giving up on reaching a
    /// rendering that no longer changes.
    ///
    /// The default value is `20`.
    pub max_iterations: usize,

    /// Whether to turn an expression that is not an equation into one. An expression in which `y`
    /// appears becomes `expr = 0`; any other expression becomes `y = expr`.
    ///
    /// The default value is `true`.
    pub complete_equations: bool,

    /// What to print for each expression.
    ///
    /// The default value is [`Emit::Notation`].
    pub emit: Emit,

    /// Whether to print every intermediate rendering, and the rule that produced it, before the
    /// final output.
    ///
    /// The default value is `false`.
    pub show_steps: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            complete_equations: true,
            emit: Emit::Notation,
            show_steps: false,
        }
    }
}
