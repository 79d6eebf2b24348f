//! Relative bit references: the (word, mask) pair that addresses one bit.

use crate::bitarray::{Word, BITS_PER_WORD};

/// log2 of [`BITS_PER_WORD`]
pub(crate) const WORD_SHIFT: usize = 5;

/// Get word index from bit position
#[inline(always)]
pub(crate) const fn get_word_idx(bit_pos: usize) -> usize {
    bit_pos >> WORD_SHIFT // bit_pos / 32
}

/// Get bit index within word from bit position
#[inline(always)]
pub(crate) const fn get_bit_idx(bit_pos: usize) -> usize {
    bit_pos & (BITS_PER_WORD - 1) // bit_pos % 32
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
pub(crate) const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        Word::MAX
    } else {
        Word::MAX >> (BITS_PER_WORD - n)
    }
}

/// Position of a single bit inside word storage.
///
/// A `BitRef` does not borrow the storage it addresses. Reading and writing
/// are separate operations taking the word slice explicitly, so a shared
/// borrow can only ever read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRef {
    /// Index of the word holding the bit
    pub word: usize,
    /// Single-bit mask within that word
    pub mask: Word,
}

impl BitRef {
    /// Address bit `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitRef;
    ///
    /// let r = BitRef::new(37);
    /// assert_eq!(r.word, 1);
    /// assert_eq!(r.mask, 1 << 5);
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            word: get_word_idx(index),
            mask: 1 << get_bit_idx(index),
        }
    }

    /// Logical index of the addressed bit.
    ///
    /// Only meaningful while `mask` has exactly one bit set.
    #[inline]
    pub const fn index(&self) -> usize {
        (self.word << WORD_SHIFT) + self.mask.trailing_zeros() as usize
    }

    /// Read the addressed bit.
    ///
    /// # Panics
    ///
    /// Panics if `self.word` is outside `words`.
    #[inline(always)]
    pub fn read(&self, words: &[Word]) -> bool {
        words[self.word] & self.mask != 0
    }

    /// Write `value` into the addressed bit: OR to set, AND-NOT to clear.
    ///
    /// # Panics
    ///
    /// Panics if `self.word` is outside `words`.
    #[inline(always)]
    pub fn write(&self, words: &mut [Word], value: bool) {
        if value {
            words[self.word] |= self.mask;
        } else {
            words[self.word] &= !self.mask;
        }
    }

    /// Step to the next bit position.
    ///
    /// The mask moves up by one; once it shifts out of the word it wraps to
    /// bit 0 of the following word.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.mask <<= 1;
        if self.mask == 0 {
            self.mask = 1;
            self.word += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_helpers() {
        assert_eq!(get_word_idx(0), 0);
        assert_eq!(get_word_idx(31), 0);
        assert_eq!(get_word_idx(32), 1);
        assert_eq!(get_bit_idx(33), 1);
        assert_eq!(get_bit_idx(63), 31);
    }

    #[test]
    fn test_bitmask() {
        assert_eq!(bitmask(0), 0);
        assert_eq!(bitmask(1), 0b1);
        assert_eq!(bitmask(5), 0b11111);
        assert_eq!(bitmask(32), Word::MAX);
        assert_eq!(bitmask(40), Word::MAX);
    }

    #[test]
    fn test_new() {
        let r = BitRef::new(0);
        assert_eq!((r.word, r.mask), (0, 1));

        let r = BitRef::new(31);
        assert_eq!((r.word, r.mask), (0, 1 << 31));

        let r = BitRef::new(64);
        assert_eq!((r.word, r.mask), (2, 1));
        assert_eq!(r.index(), 64);
    }

    #[test]
    fn test_read_write() {
        let mut words = vec![0 as Word; 2];
        let r = BitRef::new(35);

        assert!(!r.read(&words));
        r.write(&mut words, true);
        assert!(r.read(&words));
        assert_eq!(words, vec![0, 0b1000]);

        // Neighbouring bits are untouched
        BitRef::new(34).write(&mut words, true);
        r.write(&mut words, false);
        assert_eq!(words, vec![0, 0b0100]);
    }

    #[test]
    fn test_advance_wraps_word() {
        let mut r = BitRef::new(30);
        r.advance();
        assert_eq!(r, BitRef::new(31));
        r.advance();
        assert_eq!(r, BitRef::new(32));
        assert_eq!(r.index(), 32);
    }
}
