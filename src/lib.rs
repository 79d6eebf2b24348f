//! Packed Bits - growable bit arrays with fast set-bit iteration
//!
//! A [`BitArray`] stores single bits packed into 32-bit words and grows on
//! demand as bits are written. It offers two ways to walk its contents:
//!
//! - [`BitIter`]: a dense cursor over every logical position
//! - [`SetBitIter`]: a sparse cursor that jumps straight from one set bit to
//!   the next using a residual mask and leading-zero counts
//!
//! # Examples
//!
//! ```
//! use packed_bits::BitArray;
//!
//! let mut ba = BitArray::new();
//! ba.set(10, true);
//! ba.set(20, true);
//! ba.set(999, false);
//!
//! assert_eq!(ba.num(), 1000);
//! assert_eq!(ba.max(), 1024);
//! assert!(ba.is_set(20));
//! assert_eq!(ba.set_bits().collect::<Vec<_>>(), vec![10, 20]);
//!
//! // Clear everything but keep the storage
//! ba.zero_all();
//! assert_eq!(ba.num(), 0);
//! assert_eq!(ba.max(), 1024);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `trace`-level events when storage grows or is zeroed
//!
//! # Safety
//!
//! Iterators borrow the array immutably for their whole lifetime, so the
//! compiler rejects any write that could invalidate them. Hot-path
//! preconditions such as dereferencing an exhausted cursor are checked with
//! `debug_assert!` only.

// Module declarations
pub mod bit_ref;
pub mod bitarray;
pub mod error;
pub mod iter;

// Re-exports for convenient access
pub use bit_ref::BitRef;
pub use bitarray::{BitArray, Word, BITS_PER_WORD};
pub use error::{BitArrayError, Result};
pub use iter::{BitIter, SetBitIter};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Packed Bits";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Packed Bits"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _ba = BitArray::new();
        let _result: Result<()> = Ok(());
        assert_eq!(BITS_PER_WORD, 32);
    }
}
