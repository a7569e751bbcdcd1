use thiserror::Error;

use crate::multi_error::MultiError;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn not_implemented(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotImplemented {
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error signals an operation that has no implementation,
    /// as opposed to a failure that occurred while running one.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotImplemented { .. })
    }

    /// Returns the aggregated close handler failures, if this error carries them.
    pub fn close_failures(&self) -> Option<&MultiError> {
        match self.kind() {
            ErrorKind::CloseHandlers(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("not yet implemented: {message}")]
    NotImplemented { message: String },

    /// One or more close handlers failed. The message is the message of the
    /// single failure, or the combined `multiple errors: ...` rendering.
    #[error(transparent)]
    CloseHandlers(MultiError),
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<MultiError> for Error {
    fn from(errors: MultiError) -> Self {
        ErrorKind::CloseHandlers(errors).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_is_distinguishable() {
        let err = Error::not_implemented("combine");
        assert!(err.is_not_implemented());
        assert!(err.close_failures().is_none());
        assert_eq!(err.to_string(), "not yet implemented: combine");
    }

    #[test]
    fn test_close_handlers_message_is_transparent() {
        let errors = MultiError::from_errors(vec!["a".into(), "b".into()]);
        let err = Error::from(errors);
        assert_eq!(err.to_string(), "multiple errors: a, b, ");
        assert_eq!(err.close_failures().map(|e| e.len()), Some(2));
    }
}
