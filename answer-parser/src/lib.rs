//! Tokenizer and parser for the text users type as answers to algebra exercises.
//!
//! The [`tokenizer`] turns any answer string into a stream of tokens without ever failing; unknown
//! characters become [`TokenKind::Symbol`](tokenizer::TokenKind::Symbol) tokens. The [`parser`]
//! builds on top of it and accepts two small grammars: plain arithmetic (digits, `+ - * /` and
//! parentheses), and single relational conditions such as `x ≠ -3`.

pub mod parser;
pub mod tokenizer;
