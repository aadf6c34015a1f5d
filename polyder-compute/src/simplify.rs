//! Like-term collection.

use crate::term::Term;

/// Merges terms sharing an exponent by summing their coefficients.
///
/// The input is scanned left to right. The first occurrence of an exponent keeps its position in
/// the output; every later term with the same exponent merges into it. Coefficients that cancel
/// to zero are kept — dropping them is the formatter's concern. The result never contains two
/// terms with the same exponent.
pub fn simplify_terms(terms: &[Term]) -> Vec<Term> {
    let mut simplified: Vec<Term> = Vec::with_capacity(terms.len());

    for term in terms {
        // O(n^2) worst case, due to scanning the output for each term; expressions here are a
        // handful of terms long
        match simplified.iter().position(|t| t.exponent == term.exponent) {
            Some(index) => {
                let merged = simplified[index].coefficient + term.coefficient;
                simplified[index] = Term::new(merged, term.exponent);
            },
            None => simplified.push(*term),
        }
    }

    simplified
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn merges_terms_with_equal_exponents() {
        let terms = [Term::new(2.0, 3), Term::new(5.0, 1), Term::new(-7.0, 3)];
        assert_eq!(
            simplify_terms(&terms),
            vec![Term::new(-5.0, 3), Term::new(5.0, 1)],
        );
    }

    #[test]
    fn first_occurrence_keeps_its_position() {
        let terms = [
            Term::new(1.0, 0),
            Term::new(2.0, 2),
            Term::new(3.0, 0),
            Term::new(4.0, 1),
        ];
        assert_eq!(
            simplify_terms(&terms),
            vec![Term::new(4.0, 0), Term::new(2.0, 2), Term::new(4.0, 1)],
        );
    }

    #[test]
    fn cancelling_terms_stay_with_zero_coefficient() {
        let terms = [Term::new(2.0, 3), Term::new(-2.0, 3), Term::new(5.0, 1)];
        assert_eq!(
            simplify_terms(&terms),
            vec![Term::new(0.0, 3), Term::new(5.0, 1)],
        );
    }

    #[test]
    fn permutations_merge_to_the_same_multiset() {
        let terms = [
            Term::new(1.0, 2),
            Term::new(2.0, 1),
            Term::new(3.0, 2),
            Term::new(4.0, 0),
            Term::new(-2.0, 1),
        ];
        let reversed = terms.iter().rev().copied().collect::<Vec<_>>();

        let sorted = |terms: Vec<Term>| {
            let mut pairs = terms
                .into_iter()
                .map(|term| (term.exponent, term.coefficient))
                .collect::<Vec<_>>();
            pairs.sort_by_key(|&(exponent, _)| exponent);
            pairs
        };

        assert_eq!(sorted(simplify_terms(&terms)), sorted(simplify_terms(&reversed)));
    }
}
