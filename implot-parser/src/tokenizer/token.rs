use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Whitespace is skipped entirely. Names are matched case-insensitively, and because the lexer
/// always prefers the longest match, `sin` is a single [`TokenKind::Func`] rather than three
/// [`TokenKind::Variable`]s, while `sx` is two variables.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("=")]
    Eq,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,

    #[token("sin", ignore(case))]
    #[token("cos", ignore(case))]
    #[token("tan", ignore(case))]
    #[token("abs", ignore(case))]
    #[token("floor", ignore(case))]
    #[token("ceil", ignore(case))]
    Func,

    #[token("pi", ignore(case))]
    #[token("theta", ignore(case))]
    #[token("π")]
    #[token("θ")]
    Const,

    #[regex(r"[a-zA-Z]")]
    Variable,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if a token of this kind can begin an operand.
    ///
    /// If such a token directly follows one for which [`TokenKind::ends_operand`] is true, the
    /// two are multiplied implicitly.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            Self::Number | Self::Func | Self::Const | Self::Variable | Self::OpenParen,
        )
    }

    /// Returns true if a token of this kind can end an operand.
    pub fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::Const | Self::Variable | Self::CloseParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
