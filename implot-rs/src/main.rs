mod config;
mod error;
mod pipeline;

use clap::Parser;
use config::{Emit, PipelineOptions};
use env_logger::Env;
use error::Error;
use implot_compiler::shader::fragment_shader;
use log::debug;
use pipeline::Output;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};

/// Parses, simplifies and compiles equations for an implicit curve plotter.
///
/// Each expression is rendered as markup, simplified step by step until its rendering stops
/// changing, and compiled into a GLSL expression whose sign changes across the curve.
#[derive(Parser, Debug)]
#[command(name = "implot", version)]
struct Args {
    /// The expression or equation to process. If omitted, expressions are read one per line from
    /// stdin, or from an interactive prompt if stdin is a terminal.
    expression: Option<String>,

    /// The maximum number of simplification steps to take.
    #[arg(long, env = "IMPLOT_MAX_ITERATIONS", default_value_t = PipelineOptions::default().max_iterations)]
    max_iterations: usize,

    /// What to print for each expression.
    #[arg(long, value_enum, default_value_t = Emit::default())]
    emit: Emit,

    /// Print every intermediate rendering and the rule that produced it.
    #[arg(long)]
    steps: bool,

    /// Do not turn expressions that are not equations into equations.
    #[arg(long)]
    no_complete: bool,

    /// Log the stages of the pipeline. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for PipelineOptions {
    fn from(args: &Args) -> Self {
        Self {
            max_iterations: args.max_iterations,
            complete_equations: !args.no_complete,
            emit: args.emit,
            show_steps: args.steps,
        }
    }
}

/// Prints the output in the requested format.
fn print_output(output: &Output, options: &PipelineOptions) -> Result<(), Error> {
    if options.show_steps && options.emit != Emit::Json {
        for (i, rendering) in output.renderings.iter().enumerate() {
            match i.checked_sub(1).and_then(|i| output.rules.get(i)) {
                Some(rule) => println!("= {}    ({})", rendering, rule),
                None => println!("{}", rendering),
            }
        }
        if !output.fixpoint {
            println!("(stopped after {} steps)", options.max_iterations);
        }
    }

    match options.emit {
        Emit::Notation => println!("{}", output.simplified_notation()),
        Emit::Code => println!("{}", output.code),
        Emit::Shader => println!("{}", fragment_shader(&output.code)),
        Emit::Json => println!("{}", serde_json::to_string_pretty(output)?),
    }
    Ok(())
}

/// Processes one expression, printing the output or reporting the error. Returns true on
/// success.
fn process(input: &str, options: &PipelineOptions) -> bool {
    let result = pipeline::run(input, options)
        .and_then(|output| print_output(&output, options));
    match result {
        Ok(()) => true,
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

/// Runs the interactive prompt until end of input.
fn repl(options: &PipelineOptions) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, options: &PipelineOptions) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        process(&input, options);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, options) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    debug!("{:?}", args);

    let options = PipelineOptions::from(&args);

    if let Some(expression) = &args.expression {
        return if process(expression, &options) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    if !io::stdin().is_terminal() {
        // one expression per line
        let mut success = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("failed to read stdin: {}", err);
                    return ExitCode::FAILURE;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            success &= process(&line, &options);
        }
        return if success { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match repl(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
