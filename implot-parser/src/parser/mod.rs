//! A shunting-yard parser that turns a stream of tokens into a [`Node`] tree.
//!
//! The parser keeps two stacks: one of operands (finished subtrees) and one of pending
//! operators, function calls and open parentheses. When an operator arrives, every operator on
//! top of the stack that binds at least as tightly is reduced first, popping its two operands and
//! pushing the combined tree in their place. At the end of the input, the remaining operators are
//! reduced and exactly one operand must remain.
//!
//! On top of the textbook algorithm:
//!
//! - Adjacent operands are multiplied implicitly, so `2x`, `2(x + 1)` and `x sin(x)` parse as
//! products.
//! - An incoming `^` compares with a precedence one higher than its own, so that chains of `^`
//! reduce right to left.
//! - A `-` that cannot be a subtraction (at the start of the input, or after an operator or `(`)
//! is a prefix negation. It pushes `-1` as an operand and an operator that binds tighter than `*`
//! but looser than `^`, so that `-x^2` parses as `-1 * x^2`. Negating a number directly gives a
//! negative number, so `-2x` parses as `-2 * x`.
//!
//! Every operand carries the depth of its tree. A reduction that would produce a tree deeper than
//! [`MAX_DEPTH`] is rejected, since every later pass over the tree recurses once per level.

pub mod error;

use crate::{
    node::{BinOp, Func, Node, Precedence, PI, THETA},
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use error::{kind, Error};
use log::{debug, trace};
use std::ops::Range;

/// The deepest tree the parser will produce. Parentheses do not count towards the depth; each
/// operation and function call does.
pub const MAX_DEPTH: usize = 512;

/// An operator that can sit on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// A binary operator that produces a [`Node::Binary`].
    Bin(BinOp),

    /// Division, which produces a [`Node::Ratio`].
    Div,

    /// Prefix negation, which produces `-1 * operand`, or a negative number if the operand is a
    /// number.
    Neg,
}

impl Operator {
    /// Returns the operator that the given token represents, if any. `-` always maps to
    /// subtraction here; prefix negation is decided by the parser.
    fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Bin(BinOp::Add)),
            TokenKind::Sub => Some(Self::Bin(BinOp::Sub)),
            TokenKind::Mul => Some(Self::Bin(BinOp::Mul)),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Bin(BinOp::Exp)),
            TokenKind::Eq => Some(Self::Bin(BinOp::Eq)),
            _ => None,
        }
    }

    /// Returns the precedence of the operator.
    fn precedence(self) -> Precedence {
        match self {
            Self::Bin(op) => op.precedence(),
            Self::Div => Precedence::Factor,
            Self::Neg => Precedence::Neg,
        }
    }

    /// Returns the precedence that the operator compares with when it is about to be pushed.
    fn incoming_precedence(self) -> u8 {
        match self {
            Self::Bin(BinOp::Exp) => Precedence::Exp.tighter(),
            op => op.precedence().value(),
        }
    }

    /// Returns the symbol used to write this operator.
    fn symbol(self) -> &'static str {
        match self {
            Self::Bin(op) => op.symbol(),
            Self::Div => "/",
            Self::Neg => "-",
        }
    }

    /// Combines the two operands into a tree.
    fn apply(self, lhs: Node, rhs: Node) -> Node {
        match self {
            Self::Bin(op) => Node::binary(op, lhs, rhs),
            Self::Div => Node::ratio(lhs, rhs),
            Self::Neg => match rhs {
                Node::Number(n) => Node::number(-n),
                rhs => Node::binary(BinOp::Mul, lhs, rhs),
            },
        }
    }
}

/// An entry on the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    /// An operator waiting for its right-hand operand to be complete.
    Operator {
        op: Operator,
        span: Range<usize>,
    },

    /// A function name, waiting for its parenthesized argument.
    Call {
        func: Func,
        span: Range<usize>,
    },

    /// An opening parenthesis.
    Paren {
        span: Range<usize>,
    },
}

/// A high-level parser for expressions and equations. This is the type to use to parse an
/// arbitrary piece of text into a [`Node`] tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Empty if the source contained no tokens.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, used to point at the end of the input.
    source_len: usize,

    /// Subtrees that have been completely parsed, along with their depth.
    operands: Vec<(Node, usize)>,

    /// Operators, function calls and parentheses that have not been reduced yet.
    operators: Vec<Pending>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            // the only error the tokenizer reports is `NoTokensFound`, which parses as `Node::Empty`
            tokens: tokenize_complete(source).unwrap_or_default(),
            cursor: 0,
            source_len: source.len(),
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    fn next_token(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Returns the next token to be parsed without advancing the cursor.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Pushes a subtree with the given depth, failing if it is too deep.
    fn push_operand(&mut self, node: Node, depth: usize, span: Range<usize>) -> Result<(), Error> {
        if depth > MAX_DEPTH {
            return Err(Error::new(vec![span], kind::ExpressionTooDeep { max_depth: MAX_DEPTH }));
        }
        self.operands.push((node, depth));
        Ok(())
    }

    /// Pops the top two operands and pushes the result of applying the operator to them.
    fn reduce(&mut self, op: Operator, span: Range<usize>) -> Result<(), Error> {
        let missing = || Error::new(vec![span.clone()], kind::MissingOperand { operator: op.symbol() });
        let (rhs, rhs_depth) = self.operands.pop().ok_or_else(missing)?;
        let (lhs, lhs_depth) = self.operands.pop().ok_or_else(missing)?;
        trace!("reduce `{}`", op.symbol());
        self.push_operand(op.apply(lhs, rhs), lhs_depth.max(rhs_depth) + 1, span)
    }

    /// Reduces every operator on top of the stack that binds at least as tightly as `op`, then
    /// pushes `op`.
    fn push_operator(&mut self, op: Operator, span: Range<usize>) -> Result<(), Error> {
        let incoming = op.incoming_precedence();
        while let Some(Pending::Operator { op: top, .. }) = self.operators.last() {
            if top.precedence().value() < incoming {
                break;
            }

            if let Some(Pending::Operator { op, span }) = self.operators.pop() {
                self.reduce(op, span)?;
            }
        }

        self.operators.push(Pending::Operator { op, span });
        Ok(())
    }

    /// Handles a closing parenthesis: reduces everything down to the matching opening
    /// parenthesis, then applies a pending function call, if any.
    fn close_paren(&mut self, span: Range<usize>, prev: Option<TokenKind>) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator { op, span }) => self.reduce(op, span)?,
                Some(Pending::Paren { span: open }) => {
                    if prev == Some(TokenKind::OpenParen) {
                        return Err(Error::new(vec![open.start..span.end], kind::EmptyParenthesis));
                    }
                    break;
                },
                Some(Pending::Call { .. }) | None => {
                    return Err(Error::new(vec![span], kind::UnbalancedParentheses { opening: false }));
                },
            }
        }

        if let Some(Pending::Call { func, span: call_span }) = self.operators.last().cloned() {
            self.operators.pop();
            let (arg, depth) = self.operands.pop().ok_or_else(|| {
                Error::new(vec![call_span.start..span.end], kind::EmptyParenthesis)
            })?;
            trace!("reduce call to `{}`", func);
            self.push_operand(Node::call(func, arg), depth + 1, call_span)?;
        }

        Ok(())
    }

    /// Handles a single token.
    fn parse_token(&mut self, token: Token<'source>, prev: Option<TokenKind>) -> Result<(), Error> {
        let after_operand = prev.map_or(false, TokenKind::ends_operand);

        if after_operand && token.kind.starts_operand() {
            debug!("implicit multiplication before `{}` at {:?}", token.lexeme, token.span);
            let at = token.span.start..token.span.start;
            self.push_operator(Operator::Bin(BinOp::Mul), at)?;
        }

        match token.kind {
            TokenKind::Number => {
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                        expected: &[],
                        found: token.kind,
                        lexeme: token.lexeme.to_string(),
                    })
                })?;
                if !value.is_finite() {
                    return Err(Error::new(vec![token.span], kind::NumberOutOfRange {
                        lexeme: token.lexeme.to_string(),
                    }));
                }
                self.operands.push((Node::Number(value), 1));
            },
            TokenKind::Variable => {
                if let Some(name) = token.lexeme.chars().next() {
                    self.operands.push((Node::Variable(name), 1));
                }
            },
            TokenKind::Const => {
                let name = match token.lexeme.to_lowercase().as_str() {
                    "pi" | "π" => PI,
                    _ => THETA,
                };
                self.operands.push((Node::Variable(name), 1));
            },
            TokenKind::Func => {
                let func = Func::from_name(token.lexeme).ok_or_else(|| {
                    Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                        expected: &[],
                        found: token.kind,
                        lexeme: token.lexeme.to_string(),
                    })
                })?;

                match self.peek_token() {
                    Some(next) if next.kind == TokenKind::OpenParen => (),
                    Some(next) => {
                        return Err(Error::new(vec![next.span.clone()], kind::UnexpectedToken {
                            expected: &[TokenKind::OpenParen],
                            found: next.kind,
                            lexeme: next.lexeme.to_string(),
                        }));
                    },
                    None => return Err(Error::new(vec![self.eof_span()], kind::UnexpectedEof)),
                }

                self.operators.push(Pending::Call { func, span: token.span });
            },
            TokenKind::OpenParen => self.operators.push(Pending::Paren { span: token.span }),
            TokenKind::CloseParen => self.close_paren(token.span, prev)?,
            TokenKind::Sub if !after_operand => {
                debug!("prefix negation at {:?}", token.span);
                self.operands.push((Node::Number(-1.0), 1));
                self.operators.push(Pending::Operator { op: Operator::Neg, span: token.span });
            },
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Exp
                | TokenKind::Eq => {
                let op = Operator::from_token(token.kind).unwrap_or(Operator::Bin(BinOp::Mul));
                if !after_operand {
                    return Err(Error::new(vec![token.span], kind::MissingOperand { operator: op.symbol() }));
                }
                self.push_operator(op, token.span)?;
            },
            TokenKind::Symbol => {
                return Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                    expected: &[],
                    found: token.kind,
                    lexeme: token.lexeme.to_string(),
                }));
            },
        }

        Ok(())
    }

    /// Parses the entire stream of tokens into a single tree.
    ///
    /// If the source contained no tokens at all, [`Node::Empty`] is returned.
    pub fn try_parse_full(&mut self) -> Result<Node, Error> {
        self.cursor = 0;
        self.operands.clear();
        self.operators.clear();

        if self.tokens.is_empty() {
            debug!("no tokens to parse; producing an empty expression");
            return Ok(Node::Empty);
        }

        let mut prev = None;
        while let Some(token) = self.next_token() {
            let kind = token.kind;
            self.parse_token(token, prev)?;
            prev = Some(kind);
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, span } => self.reduce(op, span)?,
                Pending::Paren { span } | Pending::Call { span, .. } => {
                    return Err(Error::new(vec![span], kind::UnbalancedParentheses { opening: true }));
                },
            }
        }

        match self.operands.len() {
            1 => self.operands.pop().map(|(node, _)| node).ok_or_else(|| self.malformed()),
            _ => Err(self.malformed()),
        }
    }

    /// Creates a [`kind::MalformedExpression`] error spanning the whole input.
    fn malformed(&self) -> Error {
        Error::new(vec![0..self.source_len], kind::MalformedExpression { operands: self.operands.len() })
    }
}

/// Parses the given source into a [`Node`] tree.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(source).try_parse_full()
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use super::*;

    /// Generates well-formed trees in the shapes the parser produces: negations of numbers are
    /// negative numbers, and every other negation is `-1 * operand`.
    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            (0u32..100).prop_map(|n| Node::Number(n as f64)),
            (0u32..100).prop_map(|n| Node::Number(n as f64 / 4.0)),
            prop::sample::select(vec!['x', 'y', 'a', PI, THETA]).prop_map(Node::Variable),
        ];

        leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                (prop::sample::select(vec![BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Exp]), inner.clone(), inner.clone())
                    .prop_map(|(op, lhs, rhs)| Node::binary(op, lhs, rhs)),
                (inner.clone(), inner.clone()).prop_map(|(num, den)| Node::ratio(num, den)),
                (prop::sample::select(Func::ALL.to_vec()), inner.clone()).prop_map(|(func, arg)| Node::call(func, arg)),
                inner.prop_map(|node| match node {
                    Node::Number(n) => Node::number(-n),
                    node => Node::neg(node),
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn plain_rendering_round_trips(node in arb_node()) {
            let text = node.to_string();
            let reparsed = parse(&text).map_err(|err| TestCaseError::fail(format!("{:?} from `{}`", err, text)))?;
            prop_assert!(reparsed.equivalent(&node), "`{}` reparsed as {:?}", text, reparsed);
        }

        #[test]
        fn equations_round_trip(lhs in arb_node(), rhs in arb_node()) {
            let node = Node::binary(BinOp::Eq, lhs, rhs);
            let reparsed = parse(&node.to_string()).map_err(|err| TestCaseError::fail(format!("{:?}", err)))?;
            prop_assert!(reparsed.equivalent(&node));
        }
    }
}
