//! Error types for flipflop-lru

use std::collections::TryReserveError;
use std::fmt;

/// Result type alias for fallible cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
///
/// A lookup miss is not an error; it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A generation could not grow to the requested capacity
    Alloc(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc(e) => write!(f, "Allocation failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Alloc(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Alloc(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn overflow() -> TryReserveError {
        let mut v: Vec<u8> = Vec::new();
        match v.try_reserve(usize::MAX) {
            Err(e) => e,
            Ok(()) => panic!("reserving usize::MAX bytes succeeded"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(overflow());
        assert!(err.to_string().starts_with("Allocation failed: "));
    }

    #[test]
    fn test_error_source() {
        let err = Error::Alloc(overflow());
        assert!(err.source().is_some());
    }
}
