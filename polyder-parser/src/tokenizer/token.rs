use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can appear in a polynomial expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace.
    ///
    /// The accepted grammar contains no whitespace (callers strip it before parsing), so the
    /// parser rejects this token wherever it appears. It is lexed separately from [`Symbol`] so
    /// the tokenizer never fails outright.
    ///
    /// [`Symbol`]: TokenKind::Symbol
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("^")]
    Caret,

    /// The variable of the polynomial. Either case is accepted.
    #[regex(r"[xX]")]
    Var,

    /// A run of decimal digits, used for both coefficients and exponents.
    #[regex(r"[0-9]+")]
    Int,

    /// Any other character.
    #[regex(r".", priority = 0)]
    Symbol,
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
