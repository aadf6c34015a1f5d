use polyder_parser::parser::ast::TermExpr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single monomial `coefficient · x^exponent`.
///
/// `Term` is a plain value: the pipeline stages never mutate a term in place, they build new
/// ones. Coefficients are `f64` since differentiation scales them; exponents are unsigned, which
/// makes "the exponent is never negative" structural rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The coefficient of the term.
    pub coefficient: f64,

    /// The exponent of the variable.
    pub exponent: u32,
}

impl Term {
    /// Creates a new term.
    pub fn new(coefficient: f64, exponent: u32) -> Self {
        Self { coefficient, exponent }
    }
}

impl From<&TermExpr> for Term {
    fn from(expr: &TermExpr) -> Self {
        Self::new(expr.coefficient, expr.exponent)
    }
}
