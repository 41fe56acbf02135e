//! The algebraic normalizer: a syntactic canonical form for additive expressions.
//!
//! Normalizing puts the top-level terms of an expression in a fixed order, so that answers which
//! only differ by the order of their terms (`2x+1` and `1+2x`) compare equal as strings.
//!
//! The canonicalization is purely textual. Terms are compared by their signed text, so the same
//! monomial written with its factors in a different order (`x²y` and `yx²`) is *not* recognised as
//! the same term, and parenthesized groups are opaque.

use std::fmt;

/// The canonical multiplication symbol that `·` and `×` are rewritten to.
pub const MUL: char = '*';

/// The sign of a term. `Plus` orders before `Minus`, matching the code points of `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Sign {
    Plus,
    Minus,
}

/// A signed top-level term of an additive expression.
///
/// The derived ordering compares the sign first and then the body, which is exactly the order of
/// the term's signed text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Term<'a> {
    sign: Sign,
    body: &'a str,
}

impl<'a> Term<'a> {
    /// Reads a term from its raw text. A leading run of signs collapses into a single sign
    /// (`+-x` is `-x`); a missing sign means `+`. Returns [`None`] if nothing follows the signs.
    fn new(raw: &'a str) -> Option<Self> {
        let body = raw.trim_start_matches(['+', '-']);
        if body.is_empty() {
            return None;
        }

        let negations = raw[..raw.len() - body.len()].matches('-').count();
        let sign = if negations % 2 == 0 { Sign::Plus } else { Sign::Minus };
        Some(Self { sign, body })
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Plus => write!(f, "+{}", self.body),
            Sign::Minus => write!(f, "-{}", self.body),
        }
    }
}

/// Strips whitespace and rewrites the alternate multiplication glyphs to [`MUL`].
fn prepare(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '·' | '×' => MUL,
            c => c,
        })
        .collect()
}

/// Splits prepared text into its top-level terms.
///
/// A `+` or `-` starts a new term unless it is the first character, sits inside parentheses, or
/// directly follows another sign. Returns [`None`] for text that has no well-formed term structure:
/// unbalanced parentheses or a dangling sign.
fn split_terms(text: &str) -> Option<Vec<Term>> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = None;

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            '+' | '-' if i > 0 && depth == 0 && !matches!(prev, Some('+' | '-')) => {
                terms.push(Term::new(&text[start..i])?);
                start = i;
            },
            _ => {},
        }
        prev = Some(c);
    }

    if depth != 0 {
        return None;
    }
    terms.push(Term::new(&text[start..])?);
    Some(terms)
}

/// Normalizes an additive expression.
///
/// Whitespace is removed, `·` and `×` become `*`, and the top-level terms are sorted by their
/// signed text and joined again, without a leading `+`. Text without a well-formed term structure
/// (unbalanced parentheses, a dangling sign, empty text) is only prepared, not reordered.
///
/// The result is idempotent: normalizing it again returns it unchanged.
pub fn normalize(text: &str) -> String {
    let prepared = prepare(text);
    let Some(mut terms) = split_terms(&prepared) else {
        return prepared;
    };

    terms.sort();
    let joined = terms.iter().map(ToString::to_string).collect::<String>();
    match joined.strip_prefix('+') {
        Some(stripped) => stripped.to_string(),
        None => joined,
    }
}
