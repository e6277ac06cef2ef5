//! Concentric layer extraction.
//!
//! Layer `n` of a square matrix `A` is the L-shaped ring that meets the
//! diagonal at `A[n][n]`: the first `n + 1` cells of row `n`, followed by
//! the `n` cells of column `n` above the diagonal, read bottom to top.
//!
//! ```text
//!        col n
//!          ↑   A[0][n]      (last)
//!          ↑   ...
//!          ↑   A[n-1][n]
//! A[n][0] → … → A[n][n]     (first = A[n][0], diagonal once)
//! ```
//!
//! The result always has `2n + 1` elements, starts at `A[n][0]` and ends
//! at `A[0][n]`. Layer 0 is the single corner cell `A[0][0]`; layer
//! `size - 1` is the whole last row followed by the last column read
//! upward.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use tracing::{debug, trace};

/// How [`extract_layer_with`] builds its output.
///
/// Both strategies produce identical sequences for every valid input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Push `A[n][i]` for `i = 0..=n`, then `A[i][n]` for `i = n-1` down to 0.
    #[default]
    Accumulate,
    /// Take the half-row `A[n][0..=n]` and the half-column `A[0..n][n]`,
    /// reverse the half-column, and concatenate.
    SliceReverse,
}

/// Largest layer index whose length `2n + 1` fits in `usize`.
pub const MAX_LAYER: usize = (usize::MAX - 1) / 2;

/// Number of elements in layer `n`.
///
/// # Panics
///
/// Panics if `n` exceeds [`MAX_LAYER`].
pub fn layer_len(n: usize) -> usize {
    assert!(n <= MAX_LAYER, "layer {n} exceeds maximum {MAX_LAYER}");
    2 * n + 1
}

/// Iterator over the `(row, col)` cells of one layer in output order.
///
/// Created by [`layer_coords`].
#[derive(Clone, Debug)]
pub struct LayerCoords {
    layer: usize,
    front: usize,
    back: usize,
}

impl LayerCoords {
    fn coord_at(&self, i: usize) -> (usize, usize) {
        if i <= self.layer {
            (self.layer, i)
        } else {
            (2 * self.layer - i, self.layer)
        }
    }
}

impl Iterator for LayerCoords {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let coord = self.coord_at(self.front);
        self.front += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for LayerCoords {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.coord_at(self.back))
    }
}

impl ExactSizeIterator for LayerCoords {}

/// Cells of layer `n` in a `size x size` matrix, in extraction order.
///
/// Returns `Err(MatrixError::EmptyMatrix)` if `size` is 0,
/// `Err(MatrixError::LayerOutOfRange)` if `n >= size`, and
/// `Err(MatrixError::DimensionTooLarge)` if `n` exceeds [`MAX_LAYER`].
///
/// # Examples
///
/// ```
/// use matlayer::layer_coords;
///
/// let cells: Vec<_> = layer_coords(3, 1).unwrap().collect();
/// assert_eq!(cells, vec![(1, 0), (1, 1), (0, 1)]);
/// ```
pub fn layer_coords(size: usize, n: usize) -> Result<LayerCoords, MatrixError> {
    if size == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    check_layer(size, n)?;
    if n > MAX_LAYER {
        return Err(MatrixError::DimensionTooLarge {
            name: "layer",
            value: n,
            max: MAX_LAYER,
        });
    }
    Ok(LayerCoords {
        layer: n,
        front: 0,
        back: layer_len(n),
    })
}

/// Extract layer `n` of `matrix` using the default [`Traversal`].
///
/// The matrix is only read; element values are cloned into the result
/// unchanged. Returns `Err(MatrixError::LayerOutOfRange)` if
/// `n >= matrix.size()`.
///
/// # Examples
///
/// ```
/// use matlayer::{extract_layer, Matrix};
///
/// let m = Matrix::try_from([
///     [6, 3, 9, 10],
///     [3, -1, 6, 9],
///     [-3, 6, 1, -1],
///     [5, 2, 4, 3],
/// ])
/// .unwrap();
/// assert_eq!(extract_layer(&m, 1).unwrap(), vec![3, -1, 3]);
/// assert_eq!(extract_layer(&m, 0).unwrap(), vec![6]);
/// assert!(extract_layer(&m, 4).is_err());
/// ```
pub fn extract_layer<T: Clone>(matrix: &Matrix<T>, n: usize) -> Result<Vec<T>, MatrixError> {
    extract_layer_with(matrix, n, Traversal::default())
}

/// Extract layer `n` of `matrix` using an explicit [`Traversal`].
pub fn extract_layer_with<T: Clone>(
    matrix: &Matrix<T>,
    n: usize,
    traversal: Traversal,
) -> Result<Vec<T>, MatrixError> {
    let size = matrix.size();
    check_layer(size, n)?;
    trace!(size, layer = n, ?traversal, "extracting matrix layer");

    let out = match traversal {
        Traversal::Accumulate => accumulate(matrix, n),
        Traversal::SliceReverse => slice_reverse(matrix, n),
    };
    debug_assert_eq!(out.len(), layer_len(n));
    Ok(out)
}

fn check_layer(size: usize, n: usize) -> Result<(), MatrixError> {
    if n >= size {
        debug!(size, layer = n, "rejected out-of-range layer");
        return Err(MatrixError::LayerOutOfRange { layer: n, size });
    }
    Ok(())
}

/// Caller guarantees `n < matrix.size()`.
fn accumulate<T: Clone>(matrix: &Matrix<T>, n: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(layer_len(n));
    for i in 0..=n {
        out.push(matrix[(n, i)].clone());
    }
    for i in (0..n).rev() {
        out.push(matrix[(i, n)].clone());
    }
    out
}

/// Caller guarantees `n < matrix.size()`.
fn slice_reverse<T: Clone>(matrix: &Matrix<T>, n: usize) -> Vec<T> {
    let size = matrix.size();
    let data = matrix.as_slice();

    let row_start = n * size;
    let half_row = &data[row_start..=row_start + n];

    // Column n above the diagonal, top to bottom.
    let mut half_col: Vec<T> = data[n..].iter().step_by(size).take(n).cloned().collect();
    half_col.reverse();

    [half_row, half_col.as_slice()].concat()
}
