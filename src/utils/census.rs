//! Clear-bit census over packed storage
//!
//! Counts zero bits across whole units and then removes the padding bits
//! of the final unit, so results always refer to exactly `bits` logical
//! cells no matter what the padding physically holds.

use super::bits::{Unit, UNIT_BITS, padding_bits};
use rayon::prelude::*;

/// Count clear logical bits, picking the sequential or parallel path
/// based on the storage size.
pub fn clear_bits(units: &[Unit], bits: usize) -> usize {
    if units.len() >= crate::config::parallel_min_units() {
        clear_bits_parallel(units, bits)
    } else {
        clear_bits_sequential(units, bits)
    }
}

/// Single-threaded census
pub fn clear_bits_sequential(units: &[Unit], bits: usize) -> usize {
    let physical: usize = units.iter().map(|u| u.count_zeros() as usize).sum();
    physical - padding_zeros(units, bits)
}

/// Census split across the rayon thread pool
///
/// Only reads the buffer, so it can run while the owner holds `&self`.
pub fn clear_bits_parallel(units: &[Unit], bits: usize) -> usize {
    let physical: usize = units
        .par_chunks(4096)
        .map(|chunk| chunk.iter().map(|u| u.count_zeros() as usize).sum::<usize>())
        .sum();
    physical - padding_zeros(units, bits)
}

/// Zero bits sitting in the padding region of the final unit
fn padding_zeros(units: &[Unit], bits: usize) -> usize {
    let padding = padding_bits(bits);
    if padding == 0 {
        return 0;
    }
    let Some(&last) = units.last() else {
        return 0;
    };
    let used = UNIT_BITS - padding;
    let padding_mask: Unit = !0 << used;
    (!last & padding_mask).count_ones() as usize
}
