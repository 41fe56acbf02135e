use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    #[token("·")]
    #[token("×")]
    Mul,

    #[token("/")]
    Div,

    #[token("≠")]
    #[token("!=")]
    NotEq,

    #[token("=")]
    Eq,

    #[token("∈")]
    In,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("≤")]
    #[token("<=")]
    LessEq,

    #[token("≥")]
    #[token(">=")]
    GreaterEq,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("and")]
    And,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,

    #[regex(r"[⁰¹²³⁴⁵⁶⁷⁸⁹⁺⁻]+")]
    Superscript,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token separates the conditions of a compound answer.
    pub fn is_separator(self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::Comma)
    }

    /// Returns true if the token is one of the relational operators `≠ = ∈ < > ≤ ≥`.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::NotEq
                | TokenKind::Eq
                | TokenKind::In
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEq
                | TokenKind::GreaterEq
        )
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

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
