/// Attempts each of the given parsing expressions in order, returning from the enclosing function
/// with the first successful value.
///
/// A fatal error is returned immediately, without trying the remaining expressions. If every
/// expression fails with a non-fatal error, the macro evaluates to the error of the last one.
macro_rules! try_parse_catch_fatal {
    ($expr:expr $(,)?) => {
        match $expr {
            Ok(value) => return Ok(value),
            Err(err) if err.fatal => return Err(err),
            // ignore this error and let the caller try something else, or report it
            Err(err) => err,
        }
    };
    ($expr:expr, $($rest:expr),+ $(,)?) => {{
        let _ = try_parse_catch_fatal!($expr);
        try_parse_catch_fatal!($($rest),+)
    }};
}

pub mod ast;
pub mod error;
pub mod token;

use answer_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::{ops::Range, rc::Rc};

/// The maximum number of nested parentheses the parser will descend into before giving up.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A high-level parser for answer text. This is the type to use to parse an arithmetic
/// expression or a condition into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Shared so that cloning the parser to
    /// peek ahead only copies the cursor.
    tokens: Rc<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// How many nested expressions are currently being parsed.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: Rc::from(tokenize_complete(source)),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes every remaining token, returning the concatenated non-whitespace lexemes and the
    /// span they cover. The text is empty if only whitespace remained.
    pub fn rest(&mut self) -> (String, Range<usize>) {
        let remaining = &self.tokens[self.cursor..];
        self.cursor = self.tokens.len();

        let text = remaining
            .iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| token.lexeme)
            .collect::<String>();
        let span = match (remaining.first(), remaining.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => self.eof_span(),
        };
        (text, span)
    }

    /// Sets the cursor of this parser to the cursor of the given parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Runs the given parsing function one nesting level deeper. Returns a fatal
    /// [`kind::NestingTooDeep`] error instead if [`MAX_NESTING_DEPTH`] would be exceeded.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_fatal(kind::NestingTooDeep { max: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_kind() {
            None => {
                self.cursor = self.tokens.len();
                Ok(value)
            },
            Some(leftover) => {
                // point at the leftover token rather than the whitespace before it
                while self.current_token().is_some_and(Token::is_whitespace) {
                    self.cursor += 1;
                }

                if leftover == TokenKind::CloseParen {
                    Err(self.error_fatal(kind::UnclosedParenthesis { opening: false }))
                } else {
                    Err(self.error(kind::ExpectedEof))
                }
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        condition::Condition,
        expr::Expr,
        literal::{LitNum, LitSym},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, RelOp, UnaryOp, UnaryOpKind};

    fn num(value: f64, span: Range<usize>) -> Box<Expr> {
        Box::new(Expr::Literal(LitNum { value, span }))
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(LitNum {
            value: 16.0,
            span: 0..2,
        }));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.25");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(LitNum {
            value: 3.25,
            span: 0..4,
        }));
    }

    #[test]
    fn binary_left_associative() {
        let mut parser = Parser::new("3-2-1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: num(3.0, 0..1),
                op: BinOp { kind: BinOpKind::Sub, span: 1..2 },
                rhs: num(2.0, 2..3),
                span: 0..3,
            })),
            op: BinOp { kind: BinOpKind::Sub, span: 3..4 },
            rhs: num(1.0, 4..5),
            span: 0..5,
        }));
    }

    #[test]
    fn binary_precedence() {
        let mut parser = Parser::new("1 + 2 * 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: num(1.0, 0..1),
            op: BinOp { kind: BinOpKind::Add, span: 2..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: num(2.0, 4..5),
                op: BinOp { kind: BinOpKind::Mul, span: 6..7 },
                rhs: num(3.0, 8..9),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn negative_fraction() {
        let mut parser = Parser::new("-8/4");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Unary(Unary {
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
                operand: num(8.0, 1..2),
                span: 0..2,
            })),
            op: BinOp { kind: BinOpKind::Div, span: 2..3 },
            rhs: num(4.0, 3..4),
            span: 0..4,
        }));
    }

    #[test]
    fn parenthesized() {
        let mut parser = Parser::new("(1)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Paren(Paren {
            expr: num(1.0, 1..2),
            span: 0..3,
        }));
    }

    #[test]
    fn sign_after_operator() {
        let mut parser = Parser::new("2*-3");
        assert!(parser.try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn double_sign_rejected() {
        let mut parser = Parser::new("--5");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn variables_rejected() {
        let mut parser = Parser::new("2x + 1");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "expected end of input");
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn unknown_symbol_rejected() {
        let mut parser = Parser::new("abc$%");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn empty_parenthesis() {
        let mut parser = Parser::new("2*()");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "missing expression inside parenthesis");
    }

    #[test]
    fn unclosed_parenthesis() {
        let mut parser = Parser::new("(1+2");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert!(err.fatal);

        let mut parser = Parser::new("1+2)");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn fatal_error_in_signed_operand() {
        let mut parser = Parser::new("-(1");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![1..2]);
        assert!(err.fatal);

        let mut parser = Parser::new("2 - -()");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "missing expression inside parenthesis");
    }

    #[test]
    fn non_fatal_errors_fall_through() {
        let mut parser = Parser::new("(*)");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "unexpected token");
        assert_eq!(err.spans, vec![0..1]);
        assert!(!err.fatal);
    }

    #[test]
    fn nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
        let mut parser = Parser::new(&deep);
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "expression is nested too deeply");
        assert!(err.fatal);

        let signed = format!("-{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
        let mut parser = Parser::new(&signed);
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.to_string(), "expression is nested too deeply");

        let shallow = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH - 1), ")".repeat(MAX_NESTING_DEPTH - 1));
        let mut parser = Parser::new(&shallow);
        assert!(parser.try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn condition_simple() {
        let mut parser = Parser::new("x ≠ 0");
        let condition = parser.try_parse_full::<Condition>().unwrap();

        assert_eq!(condition, Condition {
            variable: LitSym { name: "x".to_string(), span: 0..1 },
            op: RelOp::NotEq,
            value: "0".to_string(),
            span: 0..7,
        });
    }

    #[test]
    fn condition_value_keeps_literal_text() {
        let mut parser = Parser::new("x ≠ ³√ 8");
        let condition = parser.try_parse_full::<Condition>().unwrap();
        assert_eq!(condition.op, RelOp::NotEq);
        assert_eq!(condition.value, "³√8");
    }

    #[test]
    fn condition_ascii_operator() {
        let mut parser = Parser::new("y<=-1");
        let condition = parser.try_parse_full::<Condition>().unwrap();
        assert_eq!(condition.op, RelOp::LessEq);
        assert_eq!(condition.value, "-1");
    }

    #[test]
    fn condition_without_value() {
        let mut parser = Parser::new("x ≠ ");
        let err = parser.try_parse_full::<Condition>().unwrap_err();
        assert_eq!(err.to_string(), "missing value in condition");
    }

    #[test]
    fn condition_uppercase_variable() {
        let mut parser = Parser::new("X≠2");
        assert!(parser.try_parse_full::<Condition>().is_err());
    }

    #[test]
    fn condition_without_operator() {
        let mut parser = Parser::new("2x+1");
        assert!(parser.try_parse_full::<Condition>().is_err());
    }
}
