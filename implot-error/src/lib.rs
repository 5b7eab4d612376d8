//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of the input it
//! points at.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

// lets `#[derive(ErrorKind)]` refer to this crate by name from within its own tests
extern crate self as implot_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that callers can recover the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns a reference to the error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes this error's report into a [`String`] instead of stderr.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use implot_attrs::ErrorKind;
    use super::*;

    /// A test error.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("bad operand: `{}`", operand),
        labels = ["this operand", "and this one"],
        help = "try something else",
    )]
    struct BadOperand {
        operand: char,
    }

    /// Another error, used to check that downcasting discriminates between kinds.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing here", labels = [""])]
    struct Nothing;

    /// An error whose labels depend on its fields, and which omits the `labels` tag entirely.
    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = if *fatal { "fatal" } else { "recoverable" })]
    struct Unlabeled {
        fatal: bool,
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..1], BadOperand { operand: 'x' });
        assert!(err.is::<BadOperand>());
        assert!(!err.is::<Nothing>());
        assert_eq!(err.downcast_ref::<BadOperand>(), Some(&BadOperand { operand: 'x' }));
    }

    #[test]
    fn report_contents() {
        let err = Error::new(vec![0..1, 4..5], BadOperand { operand: 'x' });
        let report = err.report_to_string("input", "x + y").unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();

        assert!(plain.contains("bad operand: `x`"));
        assert!(plain.contains("this operand"));
        assert!(plain.contains("and this one"));
        assert!(plain.contains("try something else"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Nothing);
        let report = err.report_to_string("input", "").unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(plain.contains("nothing here"));
    }

    #[test]
    fn labels_follow_spans() {
        // the second label has no span to attach to
        let err = Error::new(vec![4..5], BadOperand { operand: 'y' });
        let report = err.report_to_string("input", "x + y").unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();

        assert!(plain.contains("bad operand: `y`"));
        assert!(plain.contains("this operand"));
        assert!(!plain.contains("and this one"));
    }

    #[test]
    fn missing_labels() {
        let err = Error::new(vec![0..1, 2..3], Unlabeled { fatal: false });
        let report = err.report_to_string("input", "x + y").unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();

        assert!(plain.contains("recoverable"));
        assert!(!plain.contains("fatal"));
    }
}
