//! I/O glue shared by the binaries: input files, stats, PNG output and
//! parallel batch runs. The grid itself never touches the filesystem.

use crate::error::GridError;
use crate::models::{Cell, PackedBitGrid};
use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{GrayImage, ImageResult, Luma};
use log::trace;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Side length of the grid addressed by byte nibbles
pub const NIBBLE_GRID_DIM: usize = 16;

/// Read an input file as raw bytes.
pub fn read_input<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Toggle the cell named by each byte's (high, low) nibble pair, in order.
///
/// Stops at the first byte whose cell falls outside the grid, which can
/// only happen for grids smaller than 16x16.
pub fn apply_bytes(grid: &mut PackedBitGrid, bytes: &[u8]) -> Result<(), GridError> {
    for &byte in bytes {
        let cell = Cell::from_byte(byte);
        grid.toggle_cell(cell)?;
        if log::log_enabled!(log::Level::Trace) {
            trace!("state after ({}, {}):\n{}", cell.row, cell.col, grid);
        }
    }
    Ok(())
}

/// Summary statistics for a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    /// Count of set cells.
    pub set_cells: usize,
    /// Count of clear cells.
    pub clear_cells: usize,
    /// Total logical cells.
    pub total_cells: usize,
    /// Ratio of set cells to total cells.
    pub set_ratio: f64,
}

/// Compute set/clear stats for a grid.
pub fn grid_stats(grid: &PackedBitGrid) -> GridStats {
    let total = grid.len();
    let clear = grid.clear_count();
    let set = total - clear;
    let ratio = if total == 0 {
        0.0
    } else {
        set as f64 / total as f64
    };
    GridStats {
        set_cells: set,
        clear_cells: clear,
        total_cells: total,
        set_ratio: ratio,
    }
}

/// Largest pixel buffer `to_image` will allocate (matches `image`'s default
/// `Limits::max_alloc`).
pub const MAX_IMAGE_BYTES: usize = 512 * 1024 * 1024;

/// Rasterize a grid: set cells black, clear cells white, `scale` pixels per
/// cell side (0 is treated as 1).
///
/// Fails with a dimension limit error when the scaled image does not fit
/// `u32` sides or [`MAX_IMAGE_BYTES`].
pub fn to_image(grid: &PackedBitGrid, scale: u32) -> ImageResult<GrayImage> {
    let scale = scale.max(1);
    let side = |cells: usize| u32::try_from(cells).ok()?.checked_mul(scale);
    let (Some(width), Some(height)) = (side(grid.cols()), side(grid.rows())) else {
        return Err(dimension_error());
    };
    match (width as usize).checked_mul(height as usize) {
        Some(pixels) if pixels <= MAX_IMAGE_BYTES => {}
        _ => return Err(dimension_error()),
    }
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        if matches!(grid.get(row, col), Ok(true)) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    }))
}

fn dimension_error() -> ImageError {
    ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
}

/// Write a grid as a grayscale PNG.
pub fn save_png<P: AsRef<Path>>(grid: &PackedBitGrid, path: P, scale: u32) -> ImageResult<()> {
    to_image(grid, scale)?.save_with_format(path, image::ImageFormat::Png)
}

/// Outcome of processing one input file in a batch
#[derive(Debug)]
pub struct BatchResult {
    /// Input file
    pub path: PathBuf,
    /// Clear count on success, or why the file could not be processed
    pub outcome: io::Result<usize>,
}

/// Process every file on the rayon pool, each with its own 16x16 grid.
///
/// Results come back in input order.
pub fn run_batch(paths: &[PathBuf]) -> Vec<BatchResult> {
    paths
        .par_iter()
        .map(|path| BatchResult {
            path: path.clone(),
            outcome: run_file(path),
        })
        .collect()
}

fn run_file(path: &Path) -> io::Result<usize> {
    let bytes = read_input(path)?;
    let grid = crate::process(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(grid.clear_count())
}

/// Extension of the byte-stream inputs picked up by [`input_iter`]
pub const INPUT_EXTENSION: &str = "bin";

/// Iterate input files under `root` (recursively), sorted, with an
/// optional limit.
pub fn input_iter<P: AsRef<Path>>(root: P, limit: Option<usize>) -> impl Iterator<Item = PathBuf> {
    let mut inputs = walk_files(root.as_ref(), |path| has_extension(path, INPUT_EXTENSION));
    inputs.sort();
    if let Some(limit) = limit {
        inputs.truncate(limit);
    }
    inputs.into_iter()
}

/// Case-insensitive extension check
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
}

/// Files under `root` accepted by `keep`; unreadable directories are skipped.
fn walk_files(root: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut pending = vec![root.to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if keep(&path) {
                files.push(path);
            }
        }
    }

    files
}
