use ariadne::Fmt;
use implot_attrs::ErrorKind;
use implot_error::EXPR;
use crate::tokenizer::TokenKind;

/// The input contained nothing but whitespace.
///
/// The parser recovers from this error by producing [`Node::Empty`](crate::node::Node::Empty);
/// it is only ever returned directly by the tokenizer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no tokens found",
    labels = ["the input is empty"],
)]
pub struct NoTokensFound;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [if expected.is_empty() {
        format!("I don't know what `{}` means here", lexeme)
    } else {
        format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))
    }],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected. Empty if no token of the found kind is ever valid.
    pub expected: &'static [TokenKind],

    /// The kind of token that was found.
    pub found: TokenKind,

    /// The text of the token that was found.
    pub lexeme: String,
}

/// A parenthesis was not matched by its counterpart.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced parentheses",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *opening {
        format!("add a closing parenthesis {} somewhere after this one", ")".fg(EXPR))
    } else {
        format!("add an opening parenthesis {} somewhere before this one", "(".fg(EXPR))
    },
)]
pub struct UnbalancedParentheses {
    /// True if the unmatched parenthesis is an opening parenthesis.
    pub opening: bool,
}

/// A pair of parentheses does not enclose anything.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["these parentheses are empty"],
    help = format!("add an {} between them", "expression".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand for `{}`", operator),
    labels = [format!("this operator needs an {} on both sides", "expression".fg(EXPR))],
)]
pub struct MissingOperand {
    /// The symbol of the operator.
    pub operator: &'static str,
}

/// The expression did not reduce to exactly one tree.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed expression",
    labels = [format!("this reduced to {} expressions instead of one", operands)],
    help = "check for missing operators between expressions",
)]
pub struct MalformedExpression {
    /// The number of operands left over after parsing.
    pub operands: usize,
}

/// A numeric literal is too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "number out of range",
    labels = [format!("`{}` is too large to be represented", lexeme)],
    help = "use a smaller number, or scale the equation so that it does not need one",
)]
pub struct NumberOutOfRange {
    /// The text of the literal.
    pub lexeme: String,
}

/// The expression nests operations more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too deeply nested",
    labels = [format!("this operation nests more than {} levels deep", max_depth)],
    help = "split the expression into smaller parts",
)]
pub struct ExpressionTooDeep {
    /// The deepest nesting the parser accepts.
    pub max_depth: usize,
}
