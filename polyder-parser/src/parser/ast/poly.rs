use crate::parser::{
    error::{kind, Error},
    token::{Add, Sub},
    Parse,
    Parser,
};
use super::term::TermExpr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full polynomial expression: one or more terms separated by `+` or `-`.
///
/// Terms are kept in left-to-right source order; the sign separating two terms is folded into the
/// coefficient of the term it precedes. The first term carries no sign of its own — a leading `+`
/// or `-` fails to parse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poly {
    /// The terms of the polynomial, in source order.
    pub terms: Vec<TermExpr>,
}

impl Poly {
    /// Returns an error if any term of the polynomial is a bare constant.
    ///
    /// The published grammar requires the variable in every term. The parser itself is more
    /// lenient so that constants still lower to exponent-0 terms; this check restores the strict
    /// grammar for callers that need it, pointing at the first offending term.
    pub fn ensure_variables(&self) -> Result<(), Error> {
        match self.terms.iter().find(|term| !term.variable) {
            Some(term) => Err(Error::new(vec![term.span.clone()], kind::MissingVariable)),
            None => Ok(()),
        }
    }
}

impl Parse for Poly {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut terms = vec![input.try_parse::<TermExpr>()?];

        loop {
            let negate = if input.try_parse::<Add>().is_ok() {
                false
            } else if input.try_parse::<Sub>().is_ok() {
                true
            } else {
                break;
            };

            // a sign must be followed by a term, so `3x^2+` fails here
            let mut term = input.try_parse::<TermExpr>()?;
            if negate {
                term.coefficient = -term.coefficient;
            }
            terms.push(term);
        }

        Ok(Self { terms })
    }
}
