//! The error kinds produced while parsing polynomial expressions.
//!
//! Each kind builds its own [`ariadne`] report through the shared [`ErrorKind`] trait; most
//! delegate to [`polyder_error::report`] for the common message-plus-labels shape.

use ariadne::{Fmt, Report};
use polyder_error::{report, ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::ops::Range;

/// The end of the expression was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unexpected end of expression",
            vec![format!("you might need to add another {} here", "term".fg(EXPR))],
            None,
        )
    }
}

/// The end of the expression was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "expected end of expression",
            vec![format!("I could not understand the remaining {} here", "input".fg(EXPR))],
            None,
        )
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unexpected token",
            vec![format!(
                "expected one of: {}",
                self.expected
                    .iter()
                    .map(|kind| format!("{:?}", kind))
                    .collect::<Vec<_>>()
                    .join(", "),
            )],
            Some(format!("found {:?}", self.found)),
        )
    }
}

/// Expected a term, but found something that cannot begin one.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedTerm;

impl ErrorKind for ExpectedTerm {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "expected a term",
            vec![format!("I expected to see a {} here", "term".fg(EXPR))],
            Some(format!(
                "a term is a coefficient, the variable {}, or both, optionally raised to a power",
                "x".fg(EXPR),
            )),
        )
    }
}

/// A term does not contain the variable.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingVariable;

impl ErrorKind for MissingVariable {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "term does not contain the variable",
            vec!["this term is a bare constant".to_string()],
            Some(format!(
                "every term of a polynomial expression must contain {} or {}",
                "x".fg(EXPR),
                "X".fg(EXPR),
            )),
        )
    }
}

/// A written exponent does not fit in a 32-bit unsigned integer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentOverflow;

impl ErrorKind for ExponentOverflow {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "exponent is too large",
            vec!["this exponent does not fit in a 32-bit unsigned integer".to_string()],
            None,
        )
    }
}
