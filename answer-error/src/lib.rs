//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the span-carrying [`Error`] type built on top of it.

// lets `#[derive(ErrorKind)]` refer to this crate by name from within its own tests
extern crate self as answer_error;

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading or evaluating an answer.
pub trait ErrorKind: Debug + Send + Sync {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// A short, single-line description of the error, used in log output.
    fn message(&self) -> String;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is fatal. Fatal errors stop backtracking parsers from trying other
    /// alternatives.
    pub fatal: bool,
}

impl Error {
    /// Creates a new non-fatal error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: false }
    }

    /// Creates a new fatal error with the given spans and kind.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: true }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use answer_attrs::ErrorKind;
    use ariadne::Source;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot divide `{}` by zero", self.dividend),
        labels = ["this division"],
        help = "remove the division or change the divisor",
    )]
    struct DivideByZero {
        dividend: f64,
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![0..3], DivideByZero { dividend: 4.0 });
        assert_eq!(err.to_string(), "cannot divide `4` by zero");
        assert!(!err.fatal);
    }

    #[test]
    fn report_mentions_label() {
        let err = Error::new_fatal(vec![0..3], DivideByZero { dividend: 4.0 });
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from("4/0")), &mut buf)
            .unwrap();
        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(rendered.contains("cannot divide `4` by zero"));
        assert!(rendered.contains("this division"));
        assert!(err.fatal);
    }
}
