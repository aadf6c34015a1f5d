//! Term simplification and symbolic differentiation of parsed polynomial expressions.
//!
//! The pipeline runs in fixed stages: an expression parses into a sequence of signed [`Term`]s,
//! like terms merge by summing coefficients, the power rule differentiates each surviving term,
//! and the result renders back to text. [`evaluate`] composes all of them:
//!
//! ```
//! use polyder_compute::evaluate;
//!
//! assert_eq!(evaluate("3x^2+2x").unwrap(), "6.0x + 2.0");
//! assert_eq!(evaluate("2x^3-2x^3+5x").unwrap(), "5.0");
//! assert!(evaluate("3x^2+").is_err());
//! ```
//!
//! Each stage is also exposed on its own for callers that want to run part of the pipeline, e.g.
//! to inspect the simplified terms before differentiating:
//!
//! ```
//! use polyder_compute::{simplify_terms, Term};
//!
//! let terms = [Term::new(2.0, 3), Term::new(-2.0, 3), Term::new(5.0, 1)];
//! assert_eq!(
//!     simplify_terms(&terms),
//!     vec![Term::new(0.0, 3), Term::new(5.0, 1)],
//! );
//! ```

pub mod derivative;
pub mod eval;
pub mod fmt;
pub mod simplify;
pub mod term;

pub use derivative::differentiate;
pub use eval::evaluate;
pub use fmt::format_terms;
pub use simplify::simplify_terms;
pub use term::Term;
