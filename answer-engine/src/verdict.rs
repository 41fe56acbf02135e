use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of comparing an answer with the correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// The answer is equivalent to the correct answer.
    FullMatch,

    /// The answer contains some, but not all, of the required conditions.
    PartialMatch {
        /// How many of the required conditions the answer contains.
        matched_count: usize,

        /// How many conditions are required.
        total_count: usize,

        /// A hint for each missing condition, in the order of the correct answer, such as
        /// `x ≠ ???`. The values are hidden.
        missing_conditions: Vec<String>,
    },

    /// The answer is not equivalent to the correct answer.
    NoMatch,
}

impl Verdict {
    /// Returns true if the answer is fully correct.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::FullMatch)
    }

    /// Returns true if the answer is partially correct.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartialMatch { .. })
    }

    /// Returns true if the answer earns any credit.
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullMatch => write!(f, "correct"),
            Self::PartialMatch { matched_count, total_count, missing_conditions } => write!(
                f,
                "partially correct ({}/{}), missing: {}",
                matched_count,
                total_count,
                missing_conditions.join(", "),
            ),
            Self::NoMatch => write!(f, "incorrect"),
        }
    }
}
