use crate::parser::{
    error::{kind, Error},
    token::{Caret, Int, Var},
    Parse,
    Parser,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single monomial as written in the source, e.g. `3x^2`, `x`, or `7`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TermExpr {
    /// The coefficient of the term, with the sign separating it from the previous term folded in.
    /// Defaults to `1.0` (or `-1.0` after a `-`) when no digits are written.
    pub coefficient: f64,

    /// Whether the variable was written in the term. Terms without the variable are bare
    /// constants, which the parser accepts but [`Poly::ensure_variables`] rejects.
    ///
    /// [`Poly::ensure_variables`]: super::Poly::ensure_variables
    pub variable: bool,

    /// The exponent of the term. Defaults to `1` when the variable is written without `^`, and to
    /// `0` for a bare constant.
    pub exponent: u32,

    /// The region of the source code that this term was parsed from.
    pub span: Range<usize>,
}

impl Parse for TermExpr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let digits = input.try_parse::<Int>().ok();
        let variable = input.try_parse::<Var>().ok();

        let (start, mut end) = match (&digits, &variable) {
            (Some(digits), Some(var)) => (digits.span.start, var.span.end),
            (Some(digits), None) => (digits.span.start, digits.span.end),
            (None, Some(var)) => (var.span.start, var.span.end),
            (None, None) => return Err(input.error(kind::ExpectedTerm)),
        };

        // a run of decimal digits always parses as `f64`
        let coefficient = digits.map_or(1.0, |digits| digits.lexeme.parse().unwrap());

        // `^exponent` can only follow the variable; after a bare constant a caret is left in the
        // stream for the caller to reject
        let exponent = if variable.is_some() {
            match input.try_parse::<Caret>() {
                Ok(_) => {
                    let exponent = input.try_parse::<Int>()?;
                    end = exponent.span.end;
                    exponent.lexeme.parse().map_err(|_| {
                        Error::new(vec![exponent.span.clone()], kind::ExponentOverflow)
                    })?
                },
                Err(_) => 1,
            }
        } else {
            0
        };

        Ok(Self {
            coefficient,
            variable: variable.is_some(),
            exponent,
            span: start..end,
        })
    }
}
