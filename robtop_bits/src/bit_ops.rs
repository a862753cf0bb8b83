/// Mask covering the low `bits` bits of a word.
#[inline(always)]
pub const fn low_mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Number of bits reserved by a low mask, e.g. 13 for `0x1FFF`.
#[inline(always)]
pub const fn bit_width(mask: u32) -> u32 {
    u32::BITS - mask.leading_zeros()
}

pub const fn get_bits(word: u32, offset: u32, width: u32) -> u32 {
    (word >> offset) & low_mask(width)
}

/// Replace `width` bits of `word` starting at `offset`; excess bits of
/// `value` are dropped.
pub const fn set_bits(word: u32, offset: u32, width: u32, value: u32) -> u32 {
    let mask = low_mask(width) << offset;
    (word & !mask) | ((value << offset) & mask)
}

/// Split a word into the value above `low_mask` and the masked low field.
pub const fn split_word(word: u32, low_mask: u32) -> (u32, u32) {
    (word >> bit_width(low_mask), word & low_mask)
}

/// Inverse of [`split_word`]. The low value is masked, never rejected.
pub const fn join_word(high: u32, low: u32, low_mask: u32) -> u32 {
    (low & low_mask) | (high << bit_width(low_mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_and_masks() {
        assert_eq!(bit_width(0x1FFF), 13);
        assert_eq!(bit_width(0x7FFF), 15);
        assert_eq!(bit_width(0), 0);
        assert_eq!(low_mask(13), 0x1FFF);
        assert_eq!(low_mask(32), u32::MAX);
    }

    #[test]
    fn roundtrip_bits() {
        let word = set_bits(0, 3, 5, 0b10101);
        assert_eq!(get_bits(word, 3, 5), 0b10101);
        assert_eq!(set_bits(word, 3, 5, 0xFF), 0b11111 << 3);
    }

    #[test]
    fn low_field_is_masked() {
        assert_eq!(join_word(1, 0x3FFF, 0x1FFF), 0x1FFF | (1 << 13));
        assert_eq!(split_word(0xFFFF, 0x1FFF), (7, 0x1FFF));
    }
}
