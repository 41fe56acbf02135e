use answer_attrs::ErrorKind;
use answer_error::EXPR;
use ariadne::Fmt;
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "number".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "text".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A number literal could not be read as a floating-point value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The text of the number.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// Parentheses were nested deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this parenthesis exceeds the limit"],
    help = format!("at most {} levels of parentheses are allowed", self.max.to_string().fg(EXPR)),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}

/// A condition's variable contained characters other than lowercase letters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid variable name `{}`", self.name),
    labels = ["this variable"],
    help = "variables are written with lowercase letters only",
)]
pub struct InvalidVariableName {
    /// The offending name.
    pub name: String,
}

/// A condition had a relational operator but nothing after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing value in condition",
    labels = [format!("add a {} after this operator", "value".fg(EXPR))],
)]
pub struct MissingValue;
