//! Error types for packed bit storage.
//!
//! Almost every operation on a [`BitArray`](crate::BitArray) is infallible:
//! out-of-range reads are defined to return `false`, and growth through
//! [`BitArray::set`](crate::BitArray::set) aborts on allocation failure like
//! any other `Vec` growth. The errors here cover the two places where a
//! caller can opt into recovery: fallible growth and deserialization.

use std::collections::TryReserveError;
use thiserror::Error;

/// The error type for fallible BitArray operations.
#[derive(Error, Debug)]
pub enum BitArrayError {
    /// Word storage could not be grown to hold the requested bit
    #[error("Allocation failed while growing to {bits} bits")]
    AllocationFailed {
        /// Bit capacity that was requested
        bits: usize,
        /// Underlying reservation failure
        #[source]
        source: TryReserveError,
    },

    /// The requested index needs a capacity that does not fit in `usize`
    #[error("Capacity overflow: bit index {index} is not addressable")]
    CapacityOverflow {
        /// The index that was written
        index: usize,
    },

    /// Serialized length does not fit the serialized word storage
    #[error("Invalid layout: {num_bits} bits do not fit in a capacity of {max_bits} bits")]
    InvalidLayout {
        /// Serialized logical length
        num_bits: usize,
        /// Capacity implied by the serialized words
        max_bits: usize,
    },
}

/// A specialized `Result` type for BitArray operations.
pub type Result<T> = std::result::Result<T, BitArrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BitArrayError::CapacityOverflow { index: usize::MAX };
        assert_eq!(
            err.to_string(),
            format!("Capacity overflow: bit index {} is not addressable", usize::MAX)
        );

        let err = BitArrayError::InvalidLayout {
            num_bits: 65,
            max_bits: 64,
        };
        assert_eq!(
            err.to_string(),
            "Invalid layout: 65 bits do not fit in a capacity of 64 bits"
        );
    }

    #[test]
    fn test_allocation_failed_has_source() {
        use std::error::Error as _;

        let mut words: Vec<u32> = Vec::new();
        let source = words.try_reserve_exact(usize::MAX).unwrap_err();
        let err = BitArrayError::AllocationFailed { bits: 64, source };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Allocation failed"));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<usize> {
            Ok(32)
        }

        assert_eq!(returns_result().unwrap(), 32);
    }
}
