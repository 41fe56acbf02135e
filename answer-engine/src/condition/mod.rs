//! Conditions such as `x ≠ 0`: splitting compound answers, normalizing single conditions, and
//! comparing the condition sets of two answers with partial credit.

pub mod split;

use answer_parser::parser::{ast::Condition, token::op::RelOp, Parser};
use crate::{numerical, verdict::Verdict};
use std::{collections::BTreeSet, fmt};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use split::split_conditions;

/// A condition in normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalizedCondition {
    /// A condition of the form `<variable> <operator> <value>`. If the value was arithmetic, it
    /// holds the evaluated number, so `-8/4` and `-2` normalize identically.
    Relation {
        /// The constrained variable.
        variable: String,

        /// The relational operator.
        op: RelOp,

        /// The evaluated number, or the literal value text without whitespace.
        value: String,
    },

    /// Text that is not a condition. It is only equal to the exact same text.
    Verbatim(String),
}

impl NormalizedCondition {
    /// The string the condition is compared by.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The hint shown for this condition when it is missing from an answer: the variable and
    /// operator, with the value hidden.
    pub fn hint(&self) -> String {
        match self {
            Self::Relation { variable, op, .. } => format!("{} {} ???", variable, op),
            Self::Verbatim(_) => "???".to_string(),
        }
    }
}

impl fmt::Display for NormalizedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relation { variable, op, value } => write!(f, "{}{}{}", variable, op, value),
            Self::Verbatim(text) => f.write_str(text),
        }
    }
}

/// Normalizes a single condition.
///
/// Text that does not have the shape `<variable> <operator> <value>` is kept verbatim.
pub fn normalize_condition(text: &str) -> NormalizedCondition {
    let mut parser = Parser::new(text);
    match parser.try_parse_full::<Condition>() {
        Ok(condition) => {
            let value = numerical::evaluate(&condition.value)
                .map(numerical::format_value)
                .unwrap_or(condition.value);
            NormalizedCondition::Relation {
                variable: condition.variable.name,
                op: condition.op,
                value,
            }
        },
        Err(err) => {
            trace!(text, error = %err, "kept verbatim");
            NormalizedCondition::Verbatim(text.to_string())
        },
    }
}

/// Normalizes every condition, dropping later duplicates.
fn normalize_all(conditions: &[String]) -> Vec<NormalizedCondition> {
    let mut seen = BTreeSet::new();
    conditions
        .iter()
        .map(|text| normalize_condition(text))
        .filter(|condition| seen.insert(condition.key()))
        .collect()
}

/// Compares the conditions of a user's answer with the conditions of the correct answer.
///
/// Both sides are compared as sets of normalized conditions, so order and repeated conditions do
/// not matter. Returns:
///
/// - [`Verdict::FullMatch`] if the sets are equal;
/// - [`Verdict::PartialMatch`] if some, but not all, of the correct conditions are present;
/// - [`None`] otherwise, including when the user's answer contains every correct condition plus
///   extra ones, or when either side has no conditions.
pub fn compare_condition_sets(user: &[String], correct: &[String]) -> Option<Verdict> {
    let user = normalize_all(user);
    let correct = normalize_all(correct);
    if user.is_empty() || correct.is_empty() {
        return None;
    }

    let user_keys = user.iter().map(NormalizedCondition::key).collect::<BTreeSet<_>>();
    let correct_keys = correct.iter().map(NormalizedCondition::key).collect::<BTreeSet<_>>();
    if user_keys == correct_keys {
        return Some(Verdict::FullMatch);
    }

    let matched_count = correct_keys.intersection(&user_keys).count();
    if matched_count == 0 || matched_count == correct_keys.len() {
        return None;
    }

    let missing_conditions = correct
        .iter()
        .filter(|condition| !user_keys.contains(&condition.key()))
        .map(NormalizedCondition::hint)
        .collect();
    Some(Verdict::PartialMatch {
        matched_count,
        total_count: correct_keys.len(),
        missing_conditions,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn numeric_value_is_evaluated() {
        assert_eq!(normalize_condition("y≠-12/4"), normalize_condition("y ≠ -3"));
        assert_eq!(normalize_condition("x ≠ -8/4"), NormalizedCondition::Relation {
            variable: "x".to_string(),
            op: RelOp::NotEq,
            value: "-2".to_string(),
        });
    }

    #[test]
    fn literal_value_is_kept() {
        assert_eq!(normalize_condition("x ≠ ³√ 8").key(), "x≠³√8");
        assert_eq!(normalize_condition("x ∈ ℝ").key(), "x∈ℝ");
        assert_eq!(normalize_condition("x ≠ ±3").key(), "x≠±3");
    }

    #[test]
    fn ascii_operator_matches_glyph() {
        assert_eq!(normalize_condition("x != 2"), normalize_condition("x≠2"));
        assert_eq!(normalize_condition("x >= 1/2"), normalize_condition("x ≥ 0.5"));
    }

    #[test]
    fn not_a_condition() {
        assert_eq!(normalize_condition("2x + 1"), NormalizedCondition::Verbatim("2x + 1".to_string()));
        assert_eq!(normalize_condition("x ≠"), NormalizedCondition::Verbatim("x ≠".to_string()));
    }

    #[test]
    fn hints_hide_the_value() {
        assert_eq!(normalize_condition("x ≠ 5").hint(), "x ≠ ???");
        assert_eq!(normalize_condition("t ≤ -1").hint(), "t ≤ ???");
        assert_eq!(normalize_condition("nonsense").hint(), "???");
    }

    #[test]
    fn order_independent() {
        let verdict = compare_condition_sets(&strings(&["x≠4", "x≠0"]), &strings(&["x≠0", "x≠4"]));
        assert_eq!(verdict, Some(Verdict::FullMatch));
    }

    #[test]
    fn partial_credit() {
        let verdict = compare_condition_sets(&strings(&["x≠0"]), &strings(&["x ≠ 0", "x ≠ 5"]));
        assert_eq!(verdict, Some(Verdict::PartialMatch {
            matched_count: 1,
            total_count: 2,
            missing_conditions: vec!["x ≠ ???".to_string()],
        }));
    }

    #[test]
    fn partial_credit_with_wrong_extra() {
        let verdict = compare_condition_sets(&strings(&["x≠0", "x≠7"]), &strings(&["x ≠ 0", "x ≠ 5"]));
        assert_eq!(verdict, Some(Verdict::PartialMatch {
            matched_count: 1,
            total_count: 2,
            missing_conditions: vec!["x ≠ ???".to_string()],
        }));
    }

    #[test]
    fn duplicates_are_ignored() {
        let verdict = compare_condition_sets(
            &strings(&["x≠0", "x≠0", "x≠5"]),
            &strings(&["x ≠ 0", "x ≠ 5"]),
        );
        assert_eq!(verdict, Some(Verdict::FullMatch));
    }

    #[test]
    fn superset_is_not_credited() {
        let verdict = compare_condition_sets(
            &strings(&["x≠0", "x≠5", "x≠9"]),
            &strings(&["x ≠ 0", "x ≠ 5"]),
        );
        assert_eq!(verdict, None);
    }

    #[test]
    fn nothing_in_common() {
        assert_eq!(compare_condition_sets(&strings(&["x≠1"]), &strings(&["x≠2"])), None);
        assert_eq!(compare_condition_sets(&[], &strings(&["x≠2"])), None);
    }
}
