/// Zero-based grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Split a byte into (high nibble, low nibble) as (row, col)
    ///
    /// Both halves are always in `0..16`, so the result is valid for any
    /// grid of at least 16x16.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            row: (byte >> 4) as usize,
            col: (byte & 0x0F) as usize,
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Cell::from_byte(0x00), Cell::new(0, 0));
        assert_eq!(Cell::from_byte(0xFF), Cell::new(15, 15));
        assert_eq!(Cell::from_byte(0x12), Cell::new(1, 2));
        assert_eq!(Cell::from_byte(0xA3), Cell::new(10, 3));
    }

    #[test]
    fn test_from_tuple() {
        let cell: Cell = (4, 7).into();
        assert_eq!(cell, Cell { row: 4, col: 7 });
    }
}
