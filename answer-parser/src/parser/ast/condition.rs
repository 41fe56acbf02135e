use std::ops::Range;
use crate::parser::{
    ast::literal::LitSym,
    error::{kind, Error},
    token::op::{RelOp, RelOpToken},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single relational condition on a variable, such as `x ≠ 3` or `x ∈ ℝ`.
///
/// ```text
/// condition := Name RelOp value
/// value     := any non-empty run of tokens up to the end of the input
/// ```
///
/// The value is kept as raw text with whitespace removed; deciding whether it is a number is up to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    /// The constrained variable.
    pub variable: LitSym,

    /// The relational operator.
    pub op: RelOp,

    /// The text to the right of the operator, without whitespace.
    pub value: String,

    /// The region of the source code that this condition was parsed from.
    pub span: Range<usize>,
}

impl Parse for Condition {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let variable = input.try_parse::<LitSym>()?;
        let op = input.try_parse::<RelOpToken>()?;
        let (value, value_span) = input.rest();
        if value.is_empty() {
            return Err(Error::new(vec![op.span], kind::MissingValue));
        }

        Ok(Self {
            span: variable.span.start..value_span.end,
            variable,
            op: op.op,
            value,
        })
    }
}
