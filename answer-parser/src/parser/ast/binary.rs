use std::ops::Range;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::BinOp,
    Parser,
    Precedence,
};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses binary operations following the already-parsed `lhs`, as long as their operators
    /// have at least the given precedence.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            let op = match input_ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => op,
                _ => break,
            };
            input.set_cursor(&input_ahead);

            let mut rhs = Unary::parse_or_lower(input)?;
            loop {
                // before creating the `lhs op rhs` node, check whether the following operator
                // binds tighter; `3 + 4 * 5` must not become `(3 + 4) * 5`
                let mut input_ahead = input.clone();
                match input_ahead.try_parse::<BinOp>() {
                    Ok(next_op) if next_op.precedence() > op.precedence() => {
                        rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                    },
                    _ => break,
                }
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}
