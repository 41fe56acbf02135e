#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default absolute tolerance when comparing two numbers.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// The default maximum length of an answer, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// Options that control how answers are compared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Two numeric answers are equal if they differ by less than this amount.
    pub tolerance: f64,

    /// Answers longer than this many characters are rejected without being parsed.
    pub max_input_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl Options {
    /// Sets the numeric tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum answer length.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}
