//! Simplification of implot expression trees.
//!
//! The simplifier rewrites a [`Node`](implot_parser::Node) tree one step at a time toward a
//! simpler form. See [`simplify`] for the strategy and [`simplify::rules`] for the catalog of
//! rewrite rules.

pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify_step, simplify_step_with, step::Step};
pub use step_collector::StepCollector;
