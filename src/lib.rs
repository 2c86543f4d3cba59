//! bit_grid - fixed-size packed bit grid
//!
//! A rows x cols Boolean matrix stored one bit per cell in the smallest
//! possible buffer, with row/column fills, diagonal clears, the composite
//! toggle operation and a clear-cell census that ignores storage padding.
//!
//! The grid is single-owner and synchronous. Sharing one across threads
//! needs external locking around every sequence that must appear atomic;
//! in particular [`PackedBitGrid::toggle`] reads a cell and then acts on it.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tuning knobs
pub mod config;
/// Error type for out-of-range coordinates and dimensions
pub mod error;
/// Core data structures (PackedBitGrid, Cell)
pub mod models;
/// File, image and batch helpers used by the binaries
pub mod tools;
/// Packed storage arithmetic and census
pub mod utils;

pub use error::{Axis, GridError};
pub use models::{Cell, PackedBitGrid};

use tools::NIBBLE_GRID_DIM;

/// Run a byte stream through a fresh 16x16 grid
///
/// Each byte toggles the cell (high nibble, low nibble). Returns the final
/// grid; its [`clear_count`](PackedBitGrid::clear_count) is the figure the
/// `grid_ops` binary reports.
pub fn process(bytes: &[u8]) -> Result<PackedBitGrid, GridError> {
    let mut grid = PackedBitGrid::new(NIBBLE_GRID_DIM, NIBBLE_GRID_DIM)?;
    tools::apply_bytes(&mut grid, bytes)?;
    Ok(grid)
}
