//! Owned square matrix in row-major order.

use crate::error::MatrixError;
use crate::layer;
use std::ops::Index;

const MAX_SIDE: usize = usize::MAX.isqrt();

/// A square `size x size` matrix stored row-major in one contiguous buffer.
///
/// Cell `(row, col)` lives at flat index `row * size + col`, with
/// `0 <= row, col < size`. Construction rejects empty and non-square
/// input, so every `Matrix` has at least one cell. There are no setters:
/// once built, a matrix is only read.
///
/// # Examples
///
/// ```
/// use matlayer::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m[(1, 0)], 3);
/// assert_eq!(m.layer(1).unwrap(), vec![3, 4, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Largest side length whose cell count fits in `usize`.
    pub const MAX_SIZE: usize = MAX_SIDE;

    /// Wrap row-major `data` as a `size x size` matrix.
    ///
    /// Returns `Err(MatrixError::EmptyMatrix)` if `size` is 0,
    /// `Err(MatrixError::DimensionTooLarge)` if `size` exceeds
    /// [`Self::MAX_SIZE`], or `Err(MatrixError::LengthMismatch)` if `data`
    /// does not hold exactly `size * size` elements.
    pub fn from_vec(size: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let expected = cell_count(size)?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have as many elements as there are rows. The first
    /// row that breaks this is reported in `MatrixError::NotSquare`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        cell_count(size)?;
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MatrixError::NotSquare {
                row,
                rows: size,
                cols: r.len(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self { size, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell in
    /// row-major order.
    pub fn from_fn(
        size: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        let mut data = Vec::with_capacity(cell_count(size)?);
        for r in 0..size {
            for c in 0..size {
                data.push(f(r, c));
            }
        }
        Ok(Self { size, data })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element at `(row, col)`, or `None` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.data.get(row * self.size + col)
    }

    /// Row `row` as a contiguous slice, left to right.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.data[start..start + self.size])
    }

    /// Column `col`, top to bottom.
    pub fn column(
        &self,
        col: usize,
    ) -> Option<impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_> {
        if col >= self.size {
            return None;
        }
        Some(self.data.iter().skip(col).step_by(self.size))
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Matrix<T> {
    /// A `size x size` matrix with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Result<Self, MatrixError> {
        let cells = cell_count(size)?;
        Ok(Self {
            size,
            data: vec![value; cells],
        })
    }

    /// Extract layer `n`. See [`layer::extract_layer`].
    pub fn layer(&self, n: usize) -> Result<Vec<T>, MatrixError> {
        layer::extract_layer(self, n)
    }
}

/// Number of cells in a `size x size` matrix, rejecting empty and
/// overflowing sizes.
fn cell_count(size: usize) -> Result<usize, MatrixError> {
    if size == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if size > MAX_SIDE {
        return Err(MatrixError::DimensionTooLarge {
            name: "size",
            value: size,
            max: MAX_SIDE,
        });
    }
    Ok(size * size)
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics if either index is out of bounds, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for {0}x{0} matrix",
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T, const N: usize> TryFrom<[[T; N]; N]> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: [[T; N]; N]) -> Result<Self, Self::Error> {
        cell_count(N)?;
        Ok(Self {
            size: N,
            data: rows.into_iter().flatten().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m3() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_rows_is_row_major() {
        let m = m3();
        assert_eq!(m.size(), 3);
        assert_eq!(m.len(), 9);
        assert!(!m.is_empty());
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<i32>> = vec![];
        assert_eq!(Matrix::from_rows(rows), Err(MatrixError::EmptyMatrix));
    }

    #[test]
    fn from_rows_reports_first_ragged_row() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                rows: 2,
                cols: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_rectangular() {
        let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 0,
                rows: 2,
                cols: 3
            }
        );
    }

    #[test]
    fn from_vec_checks_length() {
        assert_eq!(
            Matrix::from_vec(2, vec![1, 2, 3]),
            Err(MatrixError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Matrix::<u8>::from_vec(0, vec![]),
            Err(MatrixError::EmptyMatrix)
        );
        assert!(Matrix::from_vec(1, vec![7]).is_ok());
    }

    #[test]
    fn from_fn_visits_every_cell() {
        let m = Matrix::from_fn(3, |r, c| r * 10 + c).unwrap();
        assert_eq!(m[(2, 1)], 21);
        assert_eq!(m[(0, 2)], 2);
        assert!(Matrix::from_fn(0, |_, _| 0).is_err());
    }

    #[test]
    fn oversized_matrices_are_rejected() {
        let big = Matrix::<u8>::MAX_SIZE + 1;
        for size in [big, 1usize << (usize::BITS / 2), usize::MAX] {
            assert_eq!(
                Matrix::filled(size, 0u8).map(|m| m.len()),
                Err(MatrixError::DimensionTooLarge {
                    name: "size",
                    value: size,
                    max: Matrix::<u8>::MAX_SIZE,
                })
            );
            assert!(matches!(
                Matrix::from_fn(size, |_, _| 0u8),
                Err(MatrixError::DimensionTooLarge { name: "size", .. })
            ));
            assert!(matches!(
                Matrix::<u8>::from_vec(size, vec![]),
                Err(MatrixError::DimensionTooLarge { name: "size", .. })
            ));
        }
        assert!(Matrix::<u8>::MAX_SIZE.checked_mul(Matrix::<u8>::MAX_SIZE).is_some());
    }

    #[test]
    fn filled_is_constant() {
        let m = Matrix::filled(4, 1.5f64).unwrap();
        assert!(m.as_slice().iter().all(|&v| v == 1.5));
        assert_eq!(Matrix::filled(0, 1.5f64), Err(MatrixError::EmptyMatrix));
    }

    #[test]
    fn try_from_array_and_nested_vec() {
        let a = Matrix::try_from([[1, 2], [3, 4]]).unwrap();
        let b = Matrix::try_from(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(a, b);

        let empty: [[i32; 0]; 0] = [];
        assert_eq!(Matrix::try_from(empty), Err(MatrixError::EmptyMatrix));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn get_is_bounds_checked() {
        let m = m3();
        assert_eq!(m.get(1, 2), Some(&6));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn row_and_column() {
        let m = m3();
        assert_eq!(m.row(1), Some(&[4, 5, 6][..]));
        assert!(m.row(3).is_none());

        let col: Vec<i32> = m.column(2).unwrap().copied().collect();
        assert_eq!(col, vec![3, 6, 9]);
        let up: Vec<i32> = m.column(0).unwrap().rev().copied().collect();
        assert_eq!(up, vec![7, 4, 1]);
        assert_eq!(m.column(1).unwrap().len(), 3);
        assert!(m.column(3).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let m = m3();
        let _ = m[(0, 3)];
    }
}
