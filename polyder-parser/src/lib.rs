//! Parser and validator for single-variable polynomial expressions.
//!
//! The accepted grammar is deliberately small: one or more terms joined by `+` or `-`, where each
//! term is an optional integer coefficient, the variable (`x` or `X`), and an optional integer
//! exponent written as `^n`. There is no whitespace, no parentheses, and no multiplication
//! between terms; callers strip whitespace before handing a line to this crate.
//!
//! ```
//! use polyder_parser::is_valid_expression;
//!
//! assert!(is_valid_expression("3x^2+2x"));
//! assert!(is_valid_expression("12X^10-x"));
//! assert!(!is_valid_expression("3x^2+"));
//! ```
//!
//! Parsing proper produces a [`Poly`](parser::ast::Poly): the terms of the expression in source
//! order, with the sign separating two terms folded into the coefficient of the term it precedes.

pub mod parser;
pub mod tokenizer;

use parser::{ast::Poly, Parser};

/// Checks whether the input conforms to the accepted polynomial grammar.
///
/// The input must already have all whitespace stripped. Every term must contain the variable, so
/// a bare constant such as `5` (or `3x^2+5`) is rejected, as are the empty string, a sign before
/// the first term, a trailing sign, and any character outside the expression alphabet. This
/// function never panics; non-matching input simply returns false.
pub fn is_valid_expression(input: &str) -> bool {
    Parser::new(input)
        .try_parse_full::<Poly>()
        .map(|poly| poly.ensure_variables().is_ok())
        .unwrap_or(false)
}
