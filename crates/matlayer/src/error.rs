//! Error types for matrix construction and layer extraction.

use std::fmt;

/// Errors arising from matrix construction or layer queries.
///
/// Every variant reports an invalid argument: the caller handed over a
/// shape or index outside the domain of the operation. Nothing here is
/// transient, so there is no retry path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Attempted to construct a matrix with zero rows.
    EmptyMatrix,
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Number of rows supplied.
        rows: usize,
        /// Length of the offending row.
        cols: usize,
    },
    /// Flat storage does not hold exactly `size * size` elements.
    LengthMismatch {
        /// Required element count.
        expected: usize,
        /// Supplied element count.
        actual: usize,
    },
    /// A size or layer index whose cell count does not fit in `usize`.
    DimensionTooLarge {
        /// Which argument was too large (`"size"` or `"layer"`).
        name: &'static str,
        /// The supplied value.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// The requested layer does not exist in a matrix of this size.
    LayerOutOfRange {
        /// The requested layer index.
        layer: usize,
        /// Side length of the matrix.
        size: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => write!(f, "matrix must have at least one row"),
            Self::NotSquare { row, rows, cols } => {
                write!(
                    f,
                    "matrix is not square: {rows} rows but row {row} has {cols} columns"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "matrix data length mismatch: expected {expected} elements, got {actual}"
                )
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} too large: maximum is {max}")
            }
            Self::LayerOutOfRange { layer, size } => {
                write!(
                    f,
                    "layer {layer} out of range for {size}x{size} matrix: valid layers are [0, {size})"
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}
