//! Dense and sparse cursors over a [`BitArray`].
//!
//! Both types work as explicit cursors (`is_valid` / `get` / `index` /
//! `advance`, compared by position) and as ordinary Rust iterators. They
//! hold a shared borrow of the array, so the array cannot be written or
//! grown while either one is alive.
//!
//! - [`BitIter`] visits every position in `[start, num())` and yields its value.
//! - [`SetBitIter`] jumps from one set bit to the next and yields indices.

use crate::bit_ref::{get_bit_idx, BitRef};
use crate::bitarray::{BitArray, Word, BITS_PER_WORD};
use std::iter::FusedIterator;

// =============================================================================
// Dense Iterator
// =============================================================================

/// Cursor over every logical bit position, ascending.
///
/// The cached [`BitRef`] is advanced incrementally, so a step costs a shift
/// instead of a division.
///
/// # Examples
///
/// ```
/// use packed_bits::BitArray;
///
/// let mut ba = BitArray::new();
/// ba.set(2, true);
/// ba.set(3, false);
///
/// let mut it = ba.iter_from(1);
/// assert!(it.is_valid());
/// assert!(!it.get());
/// it.advance();
/// assert!(it.get());
/// assert_eq!(it.index(), 2);
/// it.advance();
/// it.advance();
/// assert_eq!(it, ba.iter_end());
/// ```
#[derive(Clone, Debug)]
pub struct BitIter<'a> {
    array: &'a BitArray,
    index: usize,
    bit: BitRef,
}

impl<'a> BitIter<'a> {
    /// Starts beyond `num()` are clamped to the end cursor.
    pub(crate) fn new(array: &'a BitArray, start: usize) -> Self {
        let index = start.min(array.num());
        Self {
            array,
            index,
            bit: BitRef::new(index),
        }
    }

    /// Current logical index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// True while the cursor is before `num()`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.index < self.array.num()
    }

    /// Value of the bit under the cursor.
    ///
    /// Only meaningful while [`is_valid`](Self::is_valid) holds.
    #[inline]
    pub fn get(&self) -> bool {
        debug_assert!(self.is_valid(), "dereferenced exhausted bit iterator at {}", self.index);
        self.bit.read(self.array.words())
    }

    /// Move to the next position.
    ///
    /// Stepping past `num()` leaves only [`is_valid`](Self::is_valid) and
    /// [`index`](Self::index) meaningful.
    #[inline]
    pub fn advance(&mut self) {
        self.index += 1;
        self.bit.advance();
    }
}

impl PartialEq for BitIter<'_> {
    /// Cursors are equal when they sit on the same index.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for BitIter<'_> {}

impl Iterator for BitIter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        // A cursor stepped past the end by `advance` must stay exhausted
        if self.index >= self.array.num() {
            return None;
        }
        let value = self.get();
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.num().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIter<'_> {}

impl FusedIterator for BitIter<'_> {}

// =============================================================================
// Sparse (Set-Bit) Iterator
// =============================================================================

/// Cursor over set bits only, ascending.
///
/// Each word is tested against a residual mask of positions not yet
/// visited. The lowest remaining bit is isolated and turned into an index
/// with a leading-zero count, so a word with `k` set bits costs `O(k)` word
/// operations rather than 32 single-bit tests.
///
/// Set bits at or beyond `num()` are never reported, including stale bits
/// in the final partial word.
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
/// let mut it = ba.set_bits_from(2);
/// assert_eq!(it.index(), 3);
/// it.advance();
/// assert!(!it.is_valid());
/// assert_eq!(it, ba.set_bits_end());
/// ```
#[derive(Clone, Debug)]
pub struct SetBitIter<'a> {
    array: &'a BitArray,
    /// Word being scanned and the isolated mask of `current`
    bit: BitRef,
    /// Positions in the scanned word not yet visited
    unvisited: Word,
    /// Index of the current set bit, or `num()` once exhausted
    current: usize,
    /// Logical index of bit 0 of the scanned word
    base: usize,
}

impl<'a> SetBitIter<'a> {
    /// Starts at or beyond `num()` give the end cursor.
    pub(crate) fn new(array: &'a BitArray, start: usize) -> Self {
        if start >= array.num() {
            return Self::end(array);
        }

        let mut it = Self {
            array,
            bit: BitRef::new(start),
            unvisited: Word::MAX << get_bit_idx(start),
            current: start,
            base: start & !(BITS_PER_WORD - 1),
        };
        it.find_next_set_bit();
        it
    }

    pub(crate) fn end(array: &'a BitArray) -> Self {
        let num = array.num();
        Self {
            array,
            bit: BitRef::new(num),
            unvisited: 0,
            current: num,
            base: num,
        }
    }

    /// Index of the current set bit, `num()` once exhausted.
    #[inline]
    pub fn index(&self) -> usize {
        self.current
    }

    /// True while the cursor rests on a set bit below `num()`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.current < self.array.num()
    }

    /// Always `true`: the cursor only ever rests on set bits.
    #[inline]
    pub fn get(&self) -> bool {
        debug_assert!(self.is_valid(), "dereferenced exhausted set-bit iterator");
        true
    }

    /// Move to the next set bit, continuing from the current word.
    ///
    /// Does nothing once exhausted.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_valid() {
            return;
        }
        self.unvisited &= !self.bit.mask;
        self.find_next_set_bit();
    }

    fn find_next_set_bit(&mut self) {
        let num = self.array.num();
        let words = self.array.words();
        if num == 0 || words.is_empty() {
            self.current = num;
            return;
        }

        let last_word = (num - 1) / BITS_PER_WORD;

        let mut remaining = words[self.bit.word] & self.unvisited;
        while remaining == 0 {
            self.bit.word += 1;
            self.base += BITS_PER_WORD;

            if self.bit.word > last_word {
                self.current = num;
                return;
            }

            remaining = words[self.bit.word];
            self.unvisited = Word::MAX;
        }

        // Isolate the lowest set bit
        let rest = remaining & (remaining - 1);
        self.bit.mask = rest ^ remaining;

        self.current = self.base + BITS_PER_WORD - 1 - self.bit.mask.leading_zeros() as usize;

        // Stale bit past the length in the last word
        if self.current > num {
            self.current = num;
        }
    }
}

impl PartialEq for SetBitIter<'_> {
    /// Cursors are equal when they sit on the same index.
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for SetBitIter<'_> {}

impl Iterator for SetBitIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.current == self.array.num() {
            return None;
        }
        let index = self.current;
        self.advance();
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.array.num() - self.current))
    }
}

impl FusedIterator for SetBitIter<'_> {}
