//! Checks free-form answers to algebra exercises against their canonical results.
//!
//! The entry point is [`compare_answers`], which decides whether a typed answer is equivalent to
//! the correct one despite differences in formatting, term order, or the order and number of
//! conditions:
//!
//! ```
//! use answer_engine::{compare_answers, Verdict};
//!
//! assert_eq!(compare_answers("1 + 2x", "2x + 1"), Verdict::FullMatch);
//! assert_eq!(compare_answers("y≠-12/4", "y ≠ -3"), Verdict::FullMatch);
//! assert_eq!(
//!     compare_answers("x≠0", "x ≠ 0; x ≠ 5"),
//!     Verdict::PartialMatch {
//!         matched_count: 1,
//!         total_count: 2,
//!         missing_conditions: vec!["x ≠ ???".to_string()],
//!     },
//! );
//! ```
//!
//! Comparison is a pure function. It never panics on malformed input; anything it cannot read
//! counts as [`Verdict::NoMatch`]. Diagnostics are emitted through [`tracing`] and are silent
//! unless the application installs a subscriber.
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for the verdict, options, conditions and exercise records.

pub mod condition;
pub mod engine;
pub mod exercise;
pub mod normalize;
pub mod numerical;
pub mod options;
pub mod verdict;

pub use condition::{normalize_condition, split_conditions, NormalizedCondition};
pub use engine::{compare_answers, compare_answers_with};
pub use exercise::{highlight_parts, DerivationStep, Exercise, CONDITIONS_INSTRUCTION};
pub use normalize::normalize;
pub use numerical::evaluate;
pub use options::Options;
pub use verdict::Verdict;
