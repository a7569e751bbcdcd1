//! Core definitions (error types and common aliases), relied upon by all amudai-* crates.

pub mod error;
pub mod multi_error;
pub mod result;

pub use error::{Error, ErrorKind, StdErrorBoxed};
pub use multi_error::MultiError;
pub use result::Result;
