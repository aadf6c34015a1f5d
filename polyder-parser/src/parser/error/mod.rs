pub mod kind;

pub use polyder_error::{Error, ErrorKind};
