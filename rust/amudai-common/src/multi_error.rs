//! An ordered aggregate of independent failures.
//!
//! `MultiError` collects every failure raised by a batch of independent steps
//! (e.g. close handlers) so that all of them can be reported together once the
//! whole batch has run, instead of only the first one.

use std::fmt;

use crate::error::StdErrorBoxed;

/// Separator written after every message in the combined rendering.
const SEPARATOR: &str = ", ";

/// Prefix of the combined rendering used when more than one failure is present.
const MULTIPLE_PREFIX: &str = "multiple errors: ";

/// An ordered list of failures reported as a single error.
///
/// The `Display` rendering depends on the number of failures:
/// - none: the empty string,
/// - one: the message of that failure, verbatim,
/// - several: `multiple errors: <msg1>, <msg2>, ` (every message followed by
///   a separator, including the last one), in insertion order.
#[derive(Debug, Default)]
pub struct MultiError {
    errors: Vec<StdErrorBoxed>,
}

impl MultiError {
    /// Creates an empty `MultiError`.
    pub fn new() -> MultiError {
        MultiError { errors: Vec::new() }
    }

    /// Creates a `MultiError` from an ordered list of failures.
    pub fn from_errors(errors: Vec<StdErrorBoxed>) -> MultiError {
        MultiError { errors }
    }

    /// Appends a failure.
    pub fn push(&mut self, error: impl Into<StdErrorBoxed>) {
        self.errors.push(error.into());
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the collected failures, in insertion order.
    pub fn errors(&self) -> &[StdErrorBoxed] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<StdErrorBoxed> {
        self.errors
    }

    /// Converts the aggregate into a `Result`: `Ok(())` when no failure was
    /// collected, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), MultiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => Ok(()),
            [single] => write!(f, "{single}"),
            errors => {
                f.write_str(MULTIPLE_PREFIX)?;
                for error in errors {
                    write!(f, "{error}{SEPARATOR}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for MultiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.errors.as_slice() {
            [single] => Some(&**single),
            _ => None,
        }
    }
}

impl From<Vec<StdErrorBoxed>> for MultiError {
    fn from(errors: Vec<StdErrorBoxed>) -> Self {
        MultiError::from_errors(errors)
    }
}
