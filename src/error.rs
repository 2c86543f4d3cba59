//! Error type shared by every fallible grid operation.

use std::fmt;

/// The axis an out-of-range value was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row index, or the row dimension at construction
    Rows,
    /// Column index, or the column dimension at construction
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("row"),
            Axis::Columns => f.write_str("column"),
        }
    }
}

/// Errors reported by [`PackedBitGrid`](crate::PackedBitGrid).
///
/// There is a single failure mode: a coordinate or dimension outside the
/// range the grid can address. It is always caused by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `index` must be strictly less than `limit` along `axis`
    OutOfRange {
        /// Axis that was violated
        axis: Axis,
        /// Offending value
        index: usize,
        /// Exclusive upper bound for `index`
        limit: usize,
    },
}

impl GridError {
    pub(crate) fn row(index: usize, limit: usize) -> Self {
        GridError::OutOfRange {
            axis: Axis::Rows,
            index,
            limit,
        }
    }

    pub(crate) fn column(index: usize, limit: usize) -> Self {
        GridError::OutOfRange {
            axis: Axis::Columns,
            index,
            limit,
        }
    }

    /// Axis the error refers to
    pub fn axis(&self) -> Axis {
        match self {
            GridError::OutOfRange { axis, .. } => *axis,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange { axis, index, limit } => {
                write!(f, "{axis} {index} out of range (must be < {limit})")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GridError::row(16, 16).to_string(),
            "row 16 out of range (must be < 16)"
        );
        assert_eq!(
            GridError::column(20, 8).to_string(),
            "column 20 out of range (must be < 8)"
        );
    }

    #[test]
    fn test_axis() {
        assert_eq!(GridError::row(1, 0).axis(), Axis::Rows);
        assert_eq!(GridError::column(1, 0).axis(), Axis::Columns);
    }
}
