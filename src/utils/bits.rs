//! Storage unit arithmetic for packed bit buffers
//!
//! Logical bits are packed least-significant-bit first into fixed-width
//! units. Every helper here works on logical bit indices and knows nothing
//! about rows or columns.

/// Integer type a grid packs its bits into
pub type Unit = u8;

/// Number of logical bits held by one [`Unit`]
pub const UNIT_BITS: usize = Unit::BITS as usize;

/// Smallest unit count that can hold `bits` logical bits
#[inline]
pub fn units_for(bits: usize) -> usize {
    bits.div_ceil(UNIT_BITS)
}

/// Unit index and in-unit shift for a logical bit index
#[inline]
pub fn locate(bit_index: usize) -> (usize, u32) {
    (bit_index / UNIT_BITS, (bit_index % UNIT_BITS) as u32)
}

/// Number of unused bits at the end of the final unit
pub fn padding_bits(bits: usize) -> usize {
    match bits % UNIT_BITS {
        0 => 0,
        used => UNIT_BITS - used,
    }
}

/// Read one logical bit
#[inline]
pub fn get(units: &[Unit], bit_index: usize) -> bool {
    let (unit, shift) = locate(bit_index);
    (units[unit] >> shift) & 1 == 1
}

/// Set one logical bit
#[inline]
pub fn set(units: &mut [Unit], bit_index: usize) {
    let (unit, shift) = locate(bit_index);
    units[unit] |= 1 << shift;
}

/// Clear one logical bit
#[inline]
pub fn clear(units: &mut [Unit], bit_index: usize) {
    let (unit, shift) = locate(bit_index);
    units[unit] &= !(1 << shift);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_for() {
        assert_eq!(units_for(0), 0);
        assert_eq!(units_for(1), 1);
        assert_eq!(units_for(8), 1);
        assert_eq!(units_for(9), 2);
        assert_eq!(units_for(25), 4);
        assert_eq!(units_for(256), 32);
        assert_eq!(units_for(usize::MAX), usize::MAX / UNIT_BITS + 1);
    }

    #[test]
    fn test_locate() {
        assert_eq!(locate(0), (0, 0));
        assert_eq!(locate(7), (0, 7));
        assert_eq!(locate(8), (1, 0));
        assert_eq!(locate(19), (2, 3));
    }

    #[test]
    fn test_padding_bits() {
        assert_eq!(padding_bits(0), 0);
        assert_eq!(padding_bits(25), 7);
        assert_eq!(padding_bits(32), 0);
        assert_eq!(padding_bits(33), 7);
        assert_eq!(padding_bits(39), 1);
    }

    #[test]
    fn test_set_get_clear() {
        let mut units = vec![0 as Unit; 2];
        set(&mut units, 9);
        assert!(get(&units, 9));
        assert_eq!(units, vec![0, 0b10]);

        set(&mut units, 0);
        clear(&mut units, 9);
        assert!(!get(&units, 9));
        assert!(get(&units, 0));
        assert_eq!(units, vec![1, 0]);
    }
}
