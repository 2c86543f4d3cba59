//! Low-level helpers for packed bit storage
//!
//! - Bit addressing (unit index and shift for a logical bit)
//! - Padding arithmetic for the final storage unit
//! - Clear-bit census, sequential and rayon-parallel

pub mod bits;
pub mod census;
