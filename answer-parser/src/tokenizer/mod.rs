pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Every byte of the input is covered by exactly one token; anything the lexer cannot classify is
/// kept as a [`TokenKind::Symbol`].
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn arithmetic() {
        compare_tokens(
            "-12/4 + 0.5",
            [
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "12"),
                (TokenKind::Div, "/"),
                (TokenKind::Int, "4"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "0.5"),
            ],
        );
    }

    #[test]
    fn decimals_without_leading_or_trailing_digits() {
        compare_tokens(
            ".5+5.",
            [
                (TokenKind::Float, ".5"),
                (TokenKind::Add, "+"),
                (TokenKind::Float, "5."),
            ],
        );
    }

    #[test]
    fn multiplication_glyphs() {
        compare_tokens(
            "2·x×3*y",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Mul, "·"),
                (TokenKind::Name, "x"),
                (TokenKind::Mul, "×"),
                (TokenKind::Int, "3"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn conditions() {
        compare_tokens(
            "x ≠ 0; y≥-1 and z∈ℝ",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::NotEq, "≠"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "0"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "y"),
                (TokenKind::GreaterEq, "≥"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::And, "and"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "z"),
                (TokenKind::In, "∈"),
                (TokenKind::Symbol, "ℝ"),
            ],
        );
    }

    #[test]
    fn ascii_relational_aliases() {
        compare_tokens(
            "a!=1,b<=2,c>=3",
            [
                (TokenKind::Name, "a"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Int, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Name, "b"),
                (TokenKind::LessEq, "<="),
                (TokenKind::Int, "2"),
                (TokenKind::Comma, ","),
                (TokenKind::Name, "c"),
                (TokenKind::GreaterEq, ">="),
                (TokenKind::Int, "3"),
            ],
        );
    }

    #[test]
    fn words_containing_and() {
        compare_tokens(
            "band and",
            [
                (TokenKind::Name, "band"),
                (TokenKind::Whitespace, " "),
                (TokenKind::And, "and"),
            ],
        );
    }

    #[test]
    fn powers_and_roots() {
        compare_tokens(
            "x⁻² ³√8",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Superscript, "⁻²"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Superscript, "³"),
                (TokenKind::Symbol, "√"),
                (TokenKind::Int, "8"),
            ],
        );
    }

    #[test]
    fn complete_covers_input() {
        let input = "abc$% ≠ 5";
        let tokens = tokenize_complete(input);
        let rebuilt = tokens.iter().map(|token| token.lexeme).collect::<String>();
        assert_eq!(rebuilt, input);
        assert_eq!(tokens[1].kind, TokenKind::Symbol);
        assert_eq!(tokens[2].kind, TokenKind::Symbol);
    }
}
