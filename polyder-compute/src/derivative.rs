//! Symbolic differentiation of term sequences.

use crate::term::Term;

impl Term {
    /// Differentiates the term by the power rule: `d/dx c·x^e = (c·e)·x^(e-1)`.
    ///
    /// Constant terms (exponent 0) differentiate to zero and yield no term at all.
    pub fn derivative(self) -> Option<Term> {
        let exponent = self.exponent.checked_sub(1)?;
        Some(Term::new(self.coefficient * f64::from(self.exponent), exponent))
    }
}

/// Differentiates a simplified term sequence.
///
/// The relative order of surviving terms is preserved; the result is not re-sorted by exponent.
pub fn differentiate(terms: &[Term]) -> Vec<Term> {
    terms.iter().filter_map(|term| term.derivative()).collect()
}
