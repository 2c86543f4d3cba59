use crate::error::GridError;
use crate::models::Cell;
use crate::utils::bits::{self, Unit};
use crate::utils::census;
use log::{debug, trace};
use std::fmt;
use std::io;

/// Largest row or column count a grid accepts.
///
/// Keeps every coordinate representable as `isize` for the diagonal walk.
const MAX_DIM: usize = isize::MAX as usize;

/// Fixed-size Boolean grid packed one bit per cell
///
/// Cell `(row, col)` lives at logical bit `row * cols + col`. Storage is the
/// smallest number of units that covers `rows * cols` bits and never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitGrid {
    rows: usize,
    cols: usize,
    data: Vec<Unit>,
}

impl PackedBitGrid {
    /// Create an all-clear grid with the given dimensions
    ///
    /// Fails if either dimension exceeds `isize::MAX` or if `rows * cols`
    /// does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows > MAX_DIM {
            return Err(GridError::row(rows, MAX_DIM + 1));
        }
        if cols > MAX_DIM {
            return Err(GridError::column(cols, MAX_DIM + 1));
        }
        let bits = rows
            .checked_mul(cols)
            .ok_or_else(|| GridError::column(cols, usize::MAX / rows + 1))?;
        let units = bits::units_for(bits);
        debug!("allocating {rows}x{cols} grid ({bits} bits in {units} units)");
        Ok(Self {
            rows,
            cols,
            data: vec![0; units],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of logical cells (`rows * cols`)
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True for grids with no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_cell(row, col)?;
        Ok(self.get_bit(row, col))
    }

    /// Set the cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_cell(row, col)?;
        self.set_bit(row, col);
        Ok(())
    }

    /// Clear the cell at (row, col)
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_cell(row, col)?;
        self.clear_bit(row, col);
        Ok(())
    }

    /// Set every cell in `row`
    pub fn set_row(&mut self, row: usize) -> Result<(), GridError> {
        self.check_row(row)?;
        self.set_row_unchecked(row);
        Ok(())
    }

    /// Set every cell in `col`
    pub fn set_column(&mut self, col: usize) -> Result<(), GridError> {
        self.check_col(col)?;
        self.set_column_unchecked(col);
        Ok(())
    }

    /// Clear both diagonals passing through (row, col), the pivot included
    pub fn clear_diagonals(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_cell(row, col)?;
        self.clear_diagonals_unchecked(row, col);
        Ok(())
    }

    /// Apply the toggle operation at (row, col)
    ///
    /// A set cell clears its two diagonals; a clear cell sets its whole row
    /// and column. The two branches are not inverses, so toggling the same
    /// cell twice generally does not restore the previous state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_cell(row, col)?;
        if self.get_bit(row, col) {
            trace!("toggle ({row}, {col}): set, clearing diagonals");
            self.clear_diagonals_unchecked(row, col);
        } else {
            trace!("toggle ({row}, {col}): clear, setting row and column");
            self.set_row_unchecked(row);
            self.set_column_unchecked(col);
        }
        Ok(())
    }

    /// [`toggle`](Self::toggle) addressed by a [`Cell`]
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<(), GridError> {
        self.toggle(cell.row, cell.col)
    }

    /// Number of clear cells; padding bits in the last unit are never counted
    pub fn clear_count(&self) -> usize {
        census::clear_bits(&self.data, self.len())
    }

    /// Number of set cells
    pub fn set_count(&self) -> usize {
        self.len() - self.clear_count()
    }

    /// Clear all cells
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Get raw packed storage
    pub fn as_units(&self) -> &[Unit] {
        &self.data
    }

    /// Write the grid as rows of `1` (set) and `0` (clear), one line per row
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::row(row, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), GridError> {
        if col >= self.cols {
            return Err(GridError::column(col, self.cols));
        }
        Ok(())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_row(row)?;
        self.check_col(col)
    }

    // Everything below assumes coordinates already passed the checks above.

    #[inline]
    fn bit_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn get_bit(&self, row: usize, col: usize) -> bool {
        bits::get(&self.data, self.bit_index(row, col))
    }

    #[inline]
    fn set_bit(&mut self, row: usize, col: usize) {
        let index = self.bit_index(row, col);
        bits::set(&mut self.data, index);
    }

    #[inline]
    fn clear_bit(&mut self, row: usize, col: usize) {
        let index = self.bit_index(row, col);
        bits::clear(&mut self.data, index);
    }

    fn set_row_unchecked(&mut self, row: usize) {
        for col in 0..self.cols {
            self.set_bit(row, col);
        }
    }

    fn set_column_unchecked(&mut self, col: usize) {
        for row in 0..self.rows {
            self.set_bit(row, col);
        }
    }

    fn clear_diagonals_unchecked(&mut self, row: usize, col: usize) {
        // Lossless: both dimensions are capped at isize::MAX.
        let pivot_row = row as isize;
        let pivot_col = col as isize;
        let cols = self.cols as isize;

        for i in 0..self.rows {
            let delta = i as isize - pivot_row;
            // One candidate per diagonal; overflow means far outside the grid
            for candidate in [pivot_col.checked_sub(delta), pivot_col.checked_add(delta)] {
                if let Some(c) = candidate.filter(|c| (0..cols).contains(c)) {
                    self.clear_bit(i, c as usize);
                }
            }
        }
    }
}

impl Default for PackedBitGrid {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl fmt::Display for PackedBitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.cols + 1);
        for row in 0..self.rows {
            line.clear();
            for col in 0..self.cols {
                line.push(if self.get_bit(row, col) { '1' } else { '0' });
            }
            line.push('\n');
            f.write_str(&line)?;
        }
        Ok(())
    }
}
