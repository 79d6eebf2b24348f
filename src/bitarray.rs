//! BitArray - growable bit storage packed into 32-bit words.
//!
//! Bits live in a `Vec<u32>`: word `i` holds bits `[32*i, 32*i + 31]`,
//! least-significant bit first. The array tracks two sizes:
//!
//! - `num()`: the logical length, i.e. how many bits are in use
//! - `max()`: the capacity, always `num_words() * 32`
//!
//! Writing past the capacity grows storage by whole words. Nothing shrinks
//! it; [`BitArray::zero_all`] clears bits and length but keeps the words so
//! the array can be refilled without reallocating.
//!
//! # Bits beyond the length
//!
//! Storage bits at indices `>= num()` carry no guarantee. Growth zeroes new
//! words, but [`BitArray::set_keep_len`] can leave set bits ahead of the
//! length. Every reader (`is_set`, both iterators, equality) bounds itself
//! by `num()` and never reports them.
//!
//! # Examples
//!
//! ```
//! use packed_bits::BitArray;
//!
//! let mut ba = BitArray::new();
//! ba.set(1, true);
//! ba.set(3, true);
//! ba.set(4, false);
//!
//! assert_eq!(ba.num(), 5);
//! assert_eq!(ba.max(), 32);
//! assert_eq!(ba.set_bits().collect::<Vec<_>>(), vec![1, 3]);
//! ```

use crate::bit_ref::{bitmask, get_bit_idx, get_word_idx, BitRef};
use crate::error::{BitArrayError, Result};
use crate::iter::{BitIter, SetBitIter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 32;

/// Growable bit array using 32-bit word storage.
///
/// All bit indices are 0-based. Iterators borrow the array immutably, so
/// any write (and in particular any growth) ends their lifetime.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBitArray")]
pub struct BitArray {
    /// Storage words (32-bit)
    words: Vec<Word>,
    /// Logical length in bits
    num_bits: usize,
}

impl BitArray {
    /// Create an empty BitArray with no storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let ba = BitArray::new();
    /// assert_eq!(ba.num(), 0);
    /// assert_eq!(ba.max(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Get the logical length in bits.
    #[inline]
    pub fn num(&self) -> usize {
        self.num_bits
    }

    /// Get the bit capacity of the current storage.
    ///
    /// Always a multiple of [`BITS_PER_WORD`] and never less than [`num`](Self::num).
    #[inline]
    pub fn max(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    /// True when the logical length is 0, whatever the capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Get number of words in storage.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get direct read-only access to word storage.
    ///
    /// Includes words and bits beyond the logical length.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.words.capacity() * std::mem::size_of::<Word>()
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Test bit at position `index`.
    ///
    /// Returns `false` for any `index >= num()`, whatever the storage holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let mut ba = BitArray::new();
    /// ba.set(7, true);
    /// assert!(ba.is_set(7));
    /// assert!(!ba.is_set(6));
    /// assert!(!ba.is_set(1000));
    /// ```
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.num_bits {
            return false;
        }
        BitRef::new(index).read(&self.words)
    }

    /// Write `value` to bit `index`, growing storage and length as needed.
    ///
    /// After the call `num() >= index + 1`.
    ///
    /// # Panics
    ///
    /// Aborts if word storage cannot be allocated, like any `Vec` growth.
    /// Use [`try_set`](Self::try_set) to handle that case instead.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        self.ensure_capacity(index);
        if index >= self.num_bits {
            self.num_bits = index + 1;
        }
        BitRef::new(index).write(&mut self.words, value);
    }

    /// Write `value` to bit `index` without touching the logical length.
    ///
    /// Storage still grows if `index` is beyond the capacity. Meant for bulk
    /// initialization where the final length is already correct; the caller
    /// is responsible for that. A bit written at or beyond `num()` stays
    /// invisible to every reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let mut ba = BitArray::new();
    /// ba.set(9, false);
    /// ba.set_keep_len(2, true);
    /// ba.set_keep_len(40, true);
    ///
    /// assert_eq!(ba.num(), 10);
    /// assert_eq!(ba.max(), 64);
    /// assert!(ba.is_set(2));
    /// assert!(!ba.is_set(40));
    /// ```
    #[inline]
    pub fn set_keep_len(&mut self, index: usize, value: bool) {
        self.ensure_capacity(index);
        BitRef::new(index).write(&mut self.words, value);
    }

    /// Fallible version of [`set`](Self::set).
    ///
    /// Growth goes through `try_reserve_exact`, so an allocation failure is
    /// returned instead of aborting. On error the array is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::{BitArray, BitArrayError};
    ///
    /// let mut ba = BitArray::new();
    /// ba.try_set(100, true).unwrap();
    /// assert!(ba.is_set(100));
    ///
    /// let err = ba.try_set(usize::MAX, true).unwrap_err();
    /// assert!(matches!(err, BitArrayError::CapacityOverflow { .. }));
    /// assert_eq!(ba.num(), 101);
    /// ```
    pub fn try_set(&mut self, index: usize, value: bool) -> Result<()> {
        let required_words = get_word_idx(index) + 1;
        if required_words > self.words.len() {
            let bits = required_words
                .checked_mul(BITS_PER_WORD)
                .ok_or(BitArrayError::CapacityOverflow { index })?;
            self.words
                .try_reserve_exact(required_words - self.words.len())
                .map_err(|source| BitArrayError::AllocationFailed { bits, source })?;
        }
        self.set(index, value);
        Ok(())
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Clear every allocated word and reset the length to 0.
    ///
    /// Capacity is kept, so refilling up to the old capacity never
    /// reallocates. Cost is proportional to the capacity, not the length.
    pub fn zero_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(num_bits = self.num_bits, max_bits = self.max(), "zeroing bit storage");

        self.words.fill(0);
        self.num_bits = 0;
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Dense iterator over every bit in `[0, num())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let mut ba = BitArray::new();
    /// ba.set(1, true);
    /// ba.set(3, true);
    /// ba.set(4, false);
    ///
    /// let bits: Vec<bool> = ba.iter().collect();
    /// assert_eq!(bits, vec![false, true, false, true, false]);
    /// ```
    #[inline]
    pub fn iter(&self) -> BitIter<'_> {
        BitIter::new(self, 0)
    }

    /// Dense iterator over `[start, num())`.
    #[inline]
    pub fn iter_from(&self, start: usize) -> BitIter<'_> {
        BitIter::new(self, start)
    }

    /// The end cursor for dense iteration, positioned at `num()`.
    #[inline]
    pub fn iter_end(&self) -> BitIter<'_> {
        BitIter::new(self, self.num_bits)
    }

    /// Sparse iterator over the indices of set bits in `[0, num())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let mut ba = BitArray::new();
    /// for i in [31, 32, 70] {
    ///     ba.set(i, true);
    /// }
    /// assert_eq!(ba.set_bits().collect::<Vec<_>>(), vec![31, 32, 70]);
    /// ```
    #[inline]
    pub fn set_bits(&self) -> SetBitIter<'_> {
        SetBitIter::new(self, 0)
    }

    /// Sparse iterator over set bits in `[start, num())`.
    #[inline]
    pub fn set_bits_from(&self, start: usize) -> SetBitIter<'_> {
        SetBitIter::new(self, start)
    }

    /// The end cursor for sparse iteration, positioned at `num()`.
    #[inline]
    pub fn set_bits_end(&self) -> SetBitIter<'_> {
        SetBitIter::end(self)
    }

    // =========================================================================
    // Capacity Management
    // =========================================================================

    /// Grow storage to the minimal whole number of words holding `index`.
    #[inline]
    fn ensure_capacity(&mut self, index: usize) {
        let required_words = get_word_idx(index) + 1;
        if required_words <= self.words.len() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            index,
            old_bits = self.max(),
            new_bits = required_words * BITS_PER_WORD,
            "growing bit storage"
        );

        self.words.resize(required_words, 0);
    }
}

// =============================================================================
// Comparison Operators
// =============================================================================

impl PartialEq for BitArray {
    /// Compare logical contents only.
    ///
    /// Capacity and storage bits at or beyond `num()` are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.num_bits != other.num_bits {
            return false;
        }

        let full_words = get_word_idx(self.num_bits);
        if self.words[..full_words] != other.words[..full_words] {
            return false;
        }

        let tail_bits = get_bit_idx(self.num_bits);
        if tail_bits == 0 {
            return true;
        }
        let mask = bitmask(tail_bits);
        self.words[full_words] & mask == other.words[full_words] & mask
    }
}

impl Eq for BitArray {}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("num_bits", &self.num_bits)
            .field("max_bits", &self.max())
            .field("words", &self.words)
            .finish()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = BitIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<bool> for BitArray {
    /// Append bits starting at `num()`.
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for value in iter {
            self.set(self.num_bits, value);
        }
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut ba = BitArray::new();
        ba.extend(iter);
        ba
    }
}

/// Serialized shape of a [`BitArray`], validated before use.
#[derive(Deserialize)]
struct RawBitArray {
    words: Vec<Word>,
    num_bits: usize,
}

impl TryFrom<RawBitArray> for BitArray {
    type Error = BitArrayError;

    fn try_from(raw: RawBitArray) -> Result<Self> {
        let max_bits = raw.words.len().saturating_mul(BITS_PER_WORD);
        if raw.num_bits > max_bits {
            return Err(BitArrayError::InvalidLayout {
                num_bits: raw.num_bits,
                max_bits,
            });
        }
        Ok(Self {
            words: raw.words,
            num_bits: raw.num_bits,
        })
    }
}
