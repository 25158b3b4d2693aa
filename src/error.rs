//! Error types for slicemath operations

use thiserror::Error;

/// Result type for slicemath operations
pub type Result<T> = std::result::Result<T, SliceMathError>;

/// Errors that can occur during slicemath operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SliceMathError {
    /// Right-hand vector shorter than the vector being updated
    #[error("invalid array size {actual} (out of bounds for {expected}-element vector)")]
    SizeMismatch {
        /// Length of the vector being updated (minimum acceptable length)
        expected: usize,
        /// Length of the right-hand vector actually supplied
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_error() {
        let err = SliceMathError::SizeMismatch {
            expected: 10,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid array size 5 (out of bounds for 10-element vector)"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = SliceMathError::SizeMismatch {
            expected: 3,
            actual: 2,
        };
        let err2 = SliceMathError::SizeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err1, err2);
        assert_ne!(
            err1,
            SliceMathError::SizeMismatch {
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&SliceMathError::SizeMismatch {
            expected: 1,
            actual: 0,
        });
    }
}
