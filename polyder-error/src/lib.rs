//! The common [`ErrorKind`] trait and spanned [`Error`] type used to report user-facing
//! diagnostics for polynomial expressions.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight parts of an expression.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while processing a polynomial expression.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of the input that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Builds a report with the given message, one label per span, and an optional help note.
///
/// [`ErrorKind`] implementations whose reports need nothing more than uniformly colored labels
/// can delegate to this instead of assembling the report by hand.
pub fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(spans.iter().zip(labels).map(|(span, label)| {
            Label::new((src_id, span.clone()))
                .with_message(label)
                .with_color(EXPR)
        }));

    if let Some(help) = help {
        builder.set_help(help);
    }

    builder.finish()
}
