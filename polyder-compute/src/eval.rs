//! The full differentiation pipeline for a single expression.

use crate::{derivative::differentiate, fmt::format_terms, simplify::simplify_terms, term::Term};
use polyder_error::Error;
use polyder_parser::parser::{ast::Poly, Parser};

/// Parses the expression and computes its formatted derivative.
///
/// The input must already have all whitespace stripped. Expressions that fail the grammar —
/// including terms that are bare constants — are reported as spanned errors; callers that only
/// need a validity check can use [`polyder_parser::is_valid_expression`] and treat an error here
/// as the same condition.
pub fn evaluate(input: &str) -> Result<String, Error> {
    let poly = Parser::new(input).try_parse_full::<Poly>()?;
    poly.ensure_variables()?;

    let terms = poly.terms.iter().map(Term::from).collect::<Vec<_>>();
    let simplified = simplify_terms(&terms);
    let derivative = differentiate(&simplified);

    Ok(format_terms(&derivative))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn derivative_of_a_quadratic() {
        assert_eq!(evaluate("3x^2+2x").unwrap(), "6.0x + 2.0");
    }

    #[test]
    fn bare_variable_becomes_a_constant() {
        assert_eq!(evaluate("x").unwrap(), "1.0");
    }

    #[test]
    fn uppercase_variable_renders_lowercase() {
        assert_eq!(evaluate("2X^3").unwrap(), "6.0x^2");
    }

    #[test]
    fn cancelled_terms_vanish_from_the_output() {
        assert_eq!(evaluate("2x^3-2x^3+5x").unwrap(), "5.0");
    }

    #[test]
    fn derivative_of_a_lone_constant_term_is_empty() {
        assert_eq!(evaluate("x^0").unwrap(), "");
    }

    #[test]
    fn negative_terms_keep_the_literal_join() {
        assert_eq!(evaluate("2x-3x^2").unwrap(), "2.0 + -6.0x");
    }

    #[test]
    fn bare_constant_terms_fail_evaluation() {
        assert!(evaluate("5").is_err());
        assert!(evaluate("3x^2+2x+5").is_err());
    }

    #[test]
    fn trailing_operator_is_an_error() {
        assert!(evaluate("3x^2+").is_err());
    }

    #[test]
    fn embedded_whitespace_is_an_error() {
        assert!(evaluate("3x^2 + 2x").is_err());
    }

    // constants survive the lenient parse as exponent-0 terms; the pipeline then drops them
    #[test]
    fn pipeline_over_a_leniently_parsed_expression() {
        let poly = Parser::new("3x^2+2x+5").try_parse_full::<Poly>().unwrap();
        let terms = poly.terms.iter().map(Term::from).collect::<Vec<_>>();

        let derivative = differentiate(&simplify_terms(&terms));
        assert_eq!(format_terms(&derivative), "6.0x + 2.0");
    }
}
