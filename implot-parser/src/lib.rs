//! Parsing for implot: turns the text of an expression or equation, such as `y = x^2 - 2x + 1`,
//! into a [`Node`] tree.
//!
//! - [`tokenizer`] splits the text into tokens.
//! - [`parser`] builds a tree out of the tokens.
//! - [`node`] defines the tree, its equivalence check and its text and markup renderings.

pub mod node;
pub mod parser;
pub mod tokenizer;

pub use node::Node;
pub use parser::{parse, Parser};
