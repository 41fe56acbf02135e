use std::ops::Range;
use crate::parser::{
    ast::expr::{Expr, Primary},
    error::Error,
    token::op::UnaryOp,
    Parse,
    Parser,
};

/// A signed operand, such as `-3` or `+(1 - 2)`. At most one sign is allowed per operand, so
/// `--3` is rejected while `-(-3)` is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The sign.
    pub op: UnaryOp,

    /// The operand the sign applies to.
    pub operand: Box<Expr>,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or a primary expression if there is no sign. A fatal error in
    /// the signed operand, such as the unclosed parenthesis in `-(1`, is returned as is.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        Err(try_parse_catch_fatal!(
            input.try_parse::<Unary>().map(Expr::Unary),
            input.try_parse::<Primary>().map(Into::into),
        ))
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand: Expr = input.try_parse::<Primary>()?.into();
        let span = op.span.start..operand.span().end;
        Ok(Self {
            op,
            operand: Box::new(operand),
            span,
        })
    }
}
