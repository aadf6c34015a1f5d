pub mod poly;
pub mod term;

pub use poly::Poly;
pub use term::TermExpr;
