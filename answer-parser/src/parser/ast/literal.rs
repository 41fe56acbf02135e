use std::ops::Range;
use crate::parser::{
    error::{kind, Error},
    token::{Float, Int, Name},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Integers and decimal numbers are both supported and represented here as
/// `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input
            .try_parse::<Int>()
            .map(|num| (num.lexeme, num.span))
            .or_else(|_| input.try_parse::<Float>().map(|num| (num.lexeme, num.span)))?;
        let value = lexeme
            .parse()
            .map_err(|_| Error::new(vec![span.clone()], kind::InvalidNumber { lexeme }))?;
        Ok(Self { value, span })
    }
}

/// A variable name, such as the `x` in `x ≠ 3`. Only lowercase letters are accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the variable.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;

        if !token.lexeme.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::new(vec![token.span], kind::InvalidVariableName {
                name: token.lexeme,
            }));
        }

        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}
