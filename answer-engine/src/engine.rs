//! The equivalence engine: decides whether a user's answer is equivalent to the correct answer.
//!
//! The answers are compared by a fixed chain of strategies. Each one is only tried if the
//! previous ones were not decisive:
//!
//! 1. exact text, ignoring case and whitespace;
//! 2. numeric value, within [`Options::tolerance`]. If both answers are numbers, this stage is
//!    final: two different numbers are never partially equivalent;
//! 3. [normalized](crate::normalize) additive expressions;
//! 4. [condition sets](crate::condition), which can give partial credit.
//!
//! If no stage matches, the answer is incorrect. Nothing in this chain fails loudly: text a stage
//! cannot read simply moves the comparison on to the next stage.

use crate::{
    condition::{compare_condition_sets, split_conditions},
    normalize::normalize,
    numerical::evaluate,
    options::Options,
    verdict::Verdict,
};
use tracing::{debug, warn};

/// A stage of the comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Exact,
    Numeric,
    Normalized,
    Conditions,
}

/// Logs and returns the verdict reached at the given stage.
fn decided(stage: Stage, verdict: Verdict) -> Verdict {
    debug!(?stage, %verdict, "answer compared");
    verdict
}

/// Removes every whitespace character.
fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Compares a user's answer with the correct answer using the default [`Options`].
///
/// ```
/// use answer_engine::{compare_answers, Verdict};
///
/// assert_eq!(compare_answers("x≠4; x≠0", "x≠0, x≠4"), Verdict::FullMatch);
/// assert_eq!(compare_answers("1/3", "0.33"), Verdict::NoMatch);
/// ```
pub fn compare_answers(user: &str, correct: &str) -> Verdict {
    compare_answers_with(user, correct, &Options::default())
}

/// Compares a user's answer with the correct answer.
pub fn compare_answers_with(user: &str, correct: &str, options: &Options) -> Verdict {
    let too_long = |text: &str| text.chars().count() > options.max_input_len;
    if too_long(user) || too_long(correct) {
        warn!(max = options.max_input_len, "answer too long to compare");
        return Verdict::NoMatch;
    }

    let user = user.to_lowercase();
    let correct = correct.to_lowercase();
    let (user_compact, correct_compact) = (compact(&user), compact(&correct));

    if user_compact == correct_compact {
        return decided(Stage::Exact, Verdict::FullMatch);
    }

    if let (Some(user_value), Some(correct_value)) = (evaluate(&user_compact), evaluate(&correct_compact)) {
        let verdict = if (user_value - correct_value).abs() < options.tolerance {
            Verdict::FullMatch
        } else {
            Verdict::NoMatch
        };
        return decided(Stage::Numeric, verdict);
    }

    if normalize(&user) == normalize(&correct) {
        return decided(Stage::Normalized, Verdict::FullMatch);
    }

    let user_conditions = split_conditions(&user);
    let correct_conditions = split_conditions(&correct);
    if let Some(verdict) = compare_condition_sets(&user_conditions, &correct_conditions) {
        return decided(Stage::Conditions, verdict);
    }

    debug!("no stage matched");
    Verdict::NoMatch
}
