//! The exercise records the engine checks answers against.
//!
//! Exercises are produced by an external catalog; this module only describes their shape and the
//! operations the checking and rendering layers perform on them.

use crate::{engine::compare_answers_with, options::Options, verdict::Verdict};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters text of exercises that ask for the conditions of an expression. It is an
/// instruction rather than parameter values, so print lines leave it out.
pub const CONDITIONS_INSTRUCTION: &str = "Urči podmínky";

/// One step of a worked derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivationStep {
    /// What is done in this step, such as "Substitute x = 2".
    pub narration: String,

    /// The expression after this step. May contain HTML markup used for highlighting.
    pub result_expression_html: String,
}

impl DerivationStep {
    /// Creates a derivation step.
    pub fn new(narration: impl Into<String>, result_expression_html: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            result_expression_html: result_expression_html.into(),
        }
    }

    /// Returns the result expression with all HTML tags removed.
    pub fn plain_text(&self) -> String {
        let mut text = String::with_capacity(self.result_expression_html.len());
        let mut in_tag = false;
        for c in self.result_expression_html.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {},
            }
        }
        text
    }
}

/// A generated exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exercise {
    /// The number of the exercise within its set.
    pub id: u32,

    /// The expression or question to display.
    pub question: String,

    /// The parameters of the exercise, such as `x = 2, y = -1`. Empty if there are none.
    pub parameters: String,

    /// The worked solution, in order.
    pub derivation_steps: Vec<DerivationStep>,

    /// The canonical answer.
    pub result: String,
}

impl Exercise {
    /// Checks an answer against this exercise's canonical result.
    pub fn check(&self, answer: &str) -> Verdict {
        self.check_with(answer, &Options::default())
    }

    /// Checks an answer against this exercise's canonical result, with the given options.
    pub fn check_with(&self, answer: &str, options: &Options) -> Verdict {
        compare_answers_with(answer, &self.result, options)
    }

    /// Returns the line used to list this exercise on a printed sheet, such as
    /// `3. 2(x + 4) = (x = 1)`. The parameters are omitted if there are none, or if they are the
    /// [`CONDITIONS_INSTRUCTION`].
    pub fn print_line(&self) -> String {
        if self.parameters.is_empty() || self.parameters == CONDITIONS_INSTRUCTION {
            format!("{}. {} =", self.id, self.question)
        } else {
            format!("{}. {} = ({})", self.id, self.question, self.parameters)
        }
    }
}

/// Splits a display expression into the parts that can be highlighted individually during a
/// derivation.
///
/// Each of `+ - · / ( ) = ²` is a part on its own; the characters between them are collected into
/// one part, and spaces are dropped.
pub fn highlight_parts(expr: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for c in expr.chars() {
        match c {
            '+' | '-' | '·' | '/' | '(' | ')' | '=' | '²' => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                parts.push(c.to_string());
            },
            ' ' => {},
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
