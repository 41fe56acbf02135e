use std::ops::Range;
use crate::{
    parser::{
        ast::{binary::Binary, literal::LitNum, paren::Paren, unary::Unary},
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};

/// Represents an arithmetic expression.
///
/// Only numbers, the four basic operations, signs, and parentheses are part of the grammar.
/// Anything else (variables, powers, roots, relational symbols) fails to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Literal(LitNum),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A signed operand, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span.clone(),
            Expr::Paren(paren) => paren.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.nested(|input| {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, Precedence::Any)
        })
    }
}

/// Represents a primary expression: the operand of a sign or binary operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A number literal.
    Literal(LitNum),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(
            input.try_parse::<Paren>().map(Self::Paren),
            input.try_parse::<LitNum>().map(Self::Literal),
        );

        match input.peek_kind() {
            Some(found) => {
                let token = input.next_token()?;
                Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: &[TokenKind::Int, TokenKind::Float, TokenKind::OpenParen],
                    found,
                }))
            },
            None => Err(input.error(kind::UnexpectedEof)),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
