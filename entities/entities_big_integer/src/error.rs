//! Big Integer Errors
//!
//! Error type shared by every fallible big integer operation.

use thiserror::Error;

/// Result type for big integer operations.
pub type BigIntegerResult<T> = Result<T, BigIntegerError>;

/// Errors returned while building or parsing a big integer.
#[derive(Debug, Error)]
pub enum BigIntegerError {
    /// A caller supplied an argument the operation cannot interpret
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The backing text resource could not be opened or read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BigIntegerError {
    pub fn invalid_argument<E: ToString>(err: E) -> Self {
        BigIntegerError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_argument_display() {
        let error = BigIntegerError::invalid_argument("no source");
        assert_eq!(error.to_string(), "invalid argument: no source");
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let error: BigIntegerError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match error {
            BigIntegerError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
