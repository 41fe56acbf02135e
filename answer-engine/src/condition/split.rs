//! Splitting a compound answer such as `x≠0; x≠4` into its individual conditions.
//!
//! Three strategies are tried in order, over the token stream of the answer:
//!
//! 1. split on `;` and `,`;
//! 2. if that left a single piece, split it on the word `and` written between whitespace;
//! 3. if there is still a single piece, look for two or more directly written conditions
//!    (`<variable><operator><value>` with no whitespace inside) separated by whitespace, as in
//!    `x≠0 x≠4`.
//!
//! If none of them produces more than one piece, the single piece is the only condition.

use answer_parser::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use tracing::trace;

/// Returns the trimmed, non-empty source text of each span.
fn pieces(text: &str, spans: impl IntoIterator<Item = Range<usize>>) -> Vec<String> {
    spans
        .into_iter()
        .map(|span| text[span].trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the spans between the tokens for which `is_split` returns true.
fn spans_between<F>(text: &str, tokens: &[Token], mut is_split: F) -> Vec<Range<usize>>
where
    F: FnMut(usize) -> bool,
{
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if is_split(i) {
            spans.push(start..token.span.start);
            start = token.span.end;
        }
    }
    spans.push(start..text.len());
    spans
}

/// Splits on `;` and `,`.
fn split_on_separators(text: &str) -> Vec<String> {
    let tokens = tokenize_complete(text);
    pieces(text, spans_between(text, &tokens, |i| tokens[i].kind.is_separator()))
}

/// Splits on the word `and` when it has whitespace on both sides.
fn split_on_and(text: &str) -> Vec<String> {
    let tokens = tokenize_complete(text);
    let is_whitespace = |i: Option<usize>| {
        i.and_then(|i| tokens.get(i)).is_some_and(Token::is_whitespace)
    };
    let spans = spans_between(text, &tokens, |i| {
        tokens[i].kind == TokenKind::And
            && is_whitespace(i.checked_sub(1))
            && is_whitespace(Some(i + 1))
    });
    pieces(text, spans)
}

/// Finds every directly written condition: a lowercase variable immediately followed by a
/// relational operator and at least one token that is neither whitespace nor a separator.
fn scan_compact_conditions(text: &str) -> Vec<String> {
    let tokens = tokenize_complete(text);
    let is_value = |token: &Token| !token.is_whitespace() && !token.kind.is_separator();

    let mut found = Vec::new();
    let mut i = 0;
    while i + 2 < tokens.len() {
        let (name, op) = (&tokens[i], &tokens[i + 1]);
        let starts_condition = name.kind == TokenKind::Name
            && name.lexeme.chars().all(|c| c.is_ascii_lowercase())
            && op.kind.is_relational()
            && is_value(&tokens[i + 2]);
        if !starts_condition {
            i += 1;
            continue;
        }

        let mut end = i + 2;
        while end < tokens.len() && is_value(&tokens[end]) {
            end += 1;
        }
        found.push(name.span.start..tokens[end - 1].span.end);
        i = end;
    }

    pieces(text, found)
}

/// Splits a compound answer into its individual conditions.
///
/// Returns an empty list if the text contains no condition at all (it is empty, or consists only
/// of separators and whitespace).
pub fn split_conditions(text: &str) -> Vec<String> {
    let by_separator = split_on_separators(text);
    if by_separator.len() != 1 {
        trace!(text, count = by_separator.len(), "split on separators");
        return by_separator;
    }

    let single = &by_separator[0];
    let by_and = split_on_and(single);
    if by_and.len() > 1 {
        trace!(text, count = by_and.len(), "split on `and`");
        return by_and;
    }

    let compact = scan_compact_conditions(single);
    if compact.len() > 1 {
        trace!(text, count = compact.len(), "split on adjacent conditions");
        return compact;
    }

    by_separator
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn semicolons_and_commas() {
        assert_eq!(split_conditions("x ≠ 0; x ≠ 5"), vec!["x ≠ 0", "x ≠ 5"]);
        assert_eq!(split_conditions("x≠4, x≠0"), vec!["x≠4", "x≠0"]);
        assert_eq!(split_conditions("a≠1;b≠2,c≠3"), vec!["a≠1", "b≠2", "c≠3"]);
    }

    #[test]
    fn empty_pieces_are_dropped() {
        assert_eq!(split_conditions("x≠0;; x≠1;"), vec!["x≠0", "x≠1"]);
        assert_eq!(split_conditions("x≠0;"), vec!["x≠0"]);
    }

    #[test]
    fn single_condition() {
        assert_eq!(split_conditions(" x ≠ 5 "), vec!["x ≠ 5"]);
        assert_eq!(split_conditions("x ∈ ℝ"), vec!["x ∈ ℝ"]);
    }

    #[test]
    fn nothing_to_split() {
        assert!(split_conditions("").is_empty());
        assert!(split_conditions(" ; , ").is_empty());
    }

    #[test]
    fn word_and() {
        assert_eq!(split_conditions("x ≠ 0 and x ≠ 4"), vec!["x ≠ 0", "x ≠ 4"]);
    }

    #[test]
    fn word_and_needs_whitespace() {
        // not an `and` split, but still two directly written conditions
        assert_eq!(split_conditions("x≠0and x≠4"), vec!["x≠0and", "x≠4"]);
        assert_eq!(split_conditions("x ≠ 0and x ≠ 4"), vec!["x ≠ 0and x ≠ 4"]);
        assert_eq!(split_conditions("band≠1"), vec!["band≠1"]);
    }

    #[test]
    fn adjacent_conditions() {
        assert_eq!(split_conditions("x≠0 x≠4"), vec!["x≠0", "x≠4"]);
        assert_eq!(split_conditions("x≠-2 y≥1/2"), vec!["x≠-2", "y≥1/2"]);
    }

    #[test]
    fn single_adjacent_condition_keeps_piece() {
        assert_eq!(split_conditions("x≠0 maybe"), vec!["x≠0 maybe"]);
    }

    #[test]
    fn separators_win_over_later_strategies() {
        assert_eq!(split_conditions("x≠0 x≠1, x≠2"), vec!["x≠0 x≠1", "x≠2"]);
    }
}
