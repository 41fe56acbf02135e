//! The numeric evaluator: reduces purely arithmetic answer text to a single number.
//!
//! Only the arithmetic grammar of [`answer_parser`] is accepted: numbers, `+ - * /`, one sign per
//! operand and parentheses. Text containing anything else does not evaluate; there is no partial,
//! best-effort evaluation of mixed algebraic text.

pub mod error;
pub mod eval;

use answer_error::Error;
use answer_parser::parser::{ast::Expr, Parser};
use error::{InputTooLong, NonFinite};
use eval::Eval;
use std::ops::Range;
use tracing::trace;

/// The longest text, in characters, that the evaluator will attempt to parse.
pub const MAX_EXPRESSION_LEN: usize = 4096;

/// Evaluates the given text as an arithmetic expression, returning the structured error if the
/// text is not a finite arithmetic expression.
pub fn try_evaluate(text: &str) -> Result<f64, Error> {
    if text.chars().count() > MAX_EXPRESSION_LEN {
        return Err(Error::new(vec![0..text.len()], InputTooLong { max: MAX_EXPRESSION_LEN }));
    }

    let mut parser = Parser::new(text);
    parser.try_parse_full::<Expr>()?.eval()
}

/// Evaluates the given text as an arithmetic expression. Returns [`None`] if the text is not
/// purely arithmetic, or if evaluating it divides by zero or produces a non-finite number.
pub fn evaluate(text: &str) -> Option<f64> {
    match try_evaluate(text) {
        Ok(value) => Some(value),
        Err(err) => {
            trace!(text, error = %err, "not a numeric value");
            None
        },
    }
}

/// Renders a value the way condition values are compared: the shortest text that reads back as
/// the same `f64`, with negative zero written as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Returns the value if it is finite, or a [`NonFinite`] error pointing at the given span.
pub(crate) fn finite(value: f64, span: Range<usize>) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::new(vec![span], NonFinite))
    }
}
