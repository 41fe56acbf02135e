use answer_attrs::ErrorKind;
use answer_error::EXPR;
use ariadne::Fmt;

/// Division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division", "", "this evaluates to zero"],
)]
pub struct DivisionByZero;

/// The result of a computation is infinite or not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "result is not a finite number",
    labels = ["this expression"],
    help = format!("only {} results can be compared", "finite".fg(EXPR)),
)]
pub struct NonFinite;

/// The input is longer than the evaluator accepts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is longer than {} characters", self.max),
    labels = ["this expression"],
)]
pub struct InputTooLong {
    /// The maximum accepted length, in characters.
    pub max: usize,
}
