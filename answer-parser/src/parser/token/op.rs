//! Structs to help parse arithmetic and relational operators.

use crate::{
    parser::{
        error::{Error, kind},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign applied to a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Pos,
    Neg,
}

/// A sign in front of an operand, such as the `-` in `-3`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    /// The kind of sign.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Add => UnaryOpKind::Pos,
            TokenKind::Sub => UnaryOpKind::Neg,
            _ => return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Add, TokenKind::Sub],
                found: token.kind,
            })),
        };

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation. Every binary operation is
    /// left-associative.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Mul => BinOpKind::Mul,
            TokenKind::Div => BinOpKind::Div,
            TokenKind::Add => BinOpKind::Add,
            TokenKind::Sub => BinOpKind::Sub,
            _ => return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Add,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        };

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

/// A relational operator relating a variable to a value in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelOp {
    /// `≠`
    NotEq,

    /// `=`
    Eq,

    /// `∈`
    In,

    /// `<`
    Less,

    /// `>`
    Greater,

    /// `≤`
    LessEq,

    /// `≥`
    GreaterEq,
}

impl RelOp {
    /// Returns the canonical symbol for this operator. ASCII spellings such as `!=` are always
    /// rendered with their mathematical glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::NotEq => "≠",
            Self::Eq => "=",
            Self::In => "∈",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "≤",
            Self::GreaterEq => "≥",
        }
    }

    /// Returns the operator for the given token kind, if it is relational.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::NotEq => Self::NotEq,
            TokenKind::Eq => Self::Eq,
            TokenKind::In => Self::In,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::LessEq => Self::LessEq,
            TokenKind::GreaterEq => Self::GreaterEq,
            _ => return None,
        })
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A relational operator together with where it appeared.
#[derive(Debug, Clone, PartialEq)]
pub struct RelOpToken {
    /// The operator.
    pub op: RelOp,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl Parse for RelOpToken {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match RelOp::from_token_kind(token.kind) {
            Some(op) => Ok(Self { op, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::NotEq,
                    TokenKind::Eq,
                    TokenKind::In,
                    TokenKind::Less,
                    TokenKind::Greater,
                    TokenKind::LessEq,
                    TokenKind::GreaterEq,
                ],
                found: token.kind,
            })),
        }
    }
}
