//! A value and a boolean multiplexed into one word.

use crate::bit_ops::{get_bits, low_mask, set_bits};

/// A value in the low `N` bits of a word with a flag at bit `N`.
///
/// Values wider than `N` bits are masked when packed; this mirrors the
/// game format, which never range-checks these fields.
///
/// # Examples
///
/// ```
/// use robtop_bits::Flagged;
///
/// let word = Flagged::<7>::new(0x85, true).to_word();
/// assert_eq!(word, 0x05 | 0x80);
///
/// let unpacked = Flagged::<7>::from_word(word);
/// assert_eq!(unpacked.value(), 0x05);
/// assert!(unpacked.flag());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flagged<const N: u32> {
    value: u32,
    flag: bool,
}

/// The 16-bit form: 15-bit value, flag in the top bit.
pub type Flagged15 = Flagged<15>;

impl<const N: u32> Flagged<N> {
    pub const VALUE_MASK: u32 = low_mask(N);
    pub const FLAG_BIT: u32 = 1 << N;

    pub fn new(value: u32, flag: bool) -> Self {
        let masked = value & Self::VALUE_MASK;
        if masked != value {
            tracing::debug!(value, masked, bits = N, "value truncated to its reserved width");
        }
        Self {
            value: masked,
            flag,
        }
    }

    /// Unpack a word; bits above the flag bit are ignored.
    pub const fn from_word(word: u32) -> Self {
        Self {
            value: get_bits(word, 0, N),
            flag: get_bits(word, N, 1) != 0,
        }
    }

    pub const fn to_word(self) -> u32 {
        set_bits(self.value, N, 1, self.flag as u32)
    }

    pub const fn value(self) -> u32 {
        self.value
    }

    pub const fn flag(self) -> bool {
        self.flag
    }
}

impl Flagged15 {
    pub const fn from_u16(word: u16) -> Self {
        Self::from_word(word as u32)
    }

    pub const fn to_u16(self) -> u16 {
        self.to_word() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_for_fifteen_bits() {
        assert_eq!(Flagged15::VALUE_MASK, 0x7FFF);
        assert_eq!(Flagged15::FLAG_BIT, 0x8000);
    }

    #[test]
    fn pack_and_unpack() {
        let packed = Flagged15::new(1234, true).to_u16();
        assert_eq!(packed, 1234 | 0x8000);
        assert_eq!(Flagged15::from_u16(packed), Flagged15::new(1234, true));
        assert_eq!(Flagged15::new(1234, false).to_u16(), 1234);
    }

    #[test]
    fn bits_above_the_flag_are_dropped() {
        let unpacked = Flagged15::from_word(0x3_8005);
        assert_eq!(unpacked, Flagged15::new(5, true));
        assert_eq!(unpacked.to_word(), 0x8005);
        assert_eq!(Flagged::<3>::from_word(0b1_0110).to_word(), 0b0110);
    }

    #[test]
    fn oversized_value_is_truncated() {
        assert_eq!(Flagged15::new(40000, false).value(), 40000 & 0x7FFF);
    }
}
