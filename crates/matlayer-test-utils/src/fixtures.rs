//! Seeded matrix fixtures and tolerance assertions.
//!
//! All random fixtures draw from a [`ChaCha8Rng`] seeded by the caller, so
//! a failing case is reproduced by rerunning with the same seed.

use matlayer::Matrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::{Range, RangeInclusive};

/// Relative tolerance used by the floating-point scenario tests.
pub const DEFAULT_RTOL: f64 = 1e-6;

/// Deterministic RNG for fixtures.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw a side length from `sizes` and a valid layer index for it.
///
/// # Panics
///
/// Panics if `sizes` is empty or starts at 0.
pub fn random_size_and_layer(sizes: Range<usize>, seed: u64) -> (usize, usize) {
    assert!(sizes.start >= 1, "matrix sizes must start at 1");
    let mut rng = rng(seed);
    let size = rng.random_range(sizes);
    let layer = rng.random_range(0..size);
    (size, layer)
}

/// A `size x size` matrix of integers drawn uniformly from `values`.
///
/// # Panics
///
/// Panics if `size` is 0 or exceeds [`Matrix::MAX_SIZE`], or if `values`
/// is empty.
pub fn random_int_matrix(size: usize, values: RangeInclusive<i64>, seed: u64) -> Matrix<i64> {
    let mut rng = rng(seed);
    Matrix::from_fn(size, |_, _| rng.random_range(values.clone()))
        .expect("fixture size must be in 1..=Matrix::MAX_SIZE")
}

/// A `size x size` matrix of floats drawn uniformly from `values`.
///
/// # Panics
///
/// Panics if `size` is 0 or exceeds [`Matrix::MAX_SIZE`], or if `values`
/// is empty.
pub fn random_float_matrix(size: usize, values: Range<f64>, seed: u64) -> Matrix<f64> {
    let mut rng = rng(seed);
    Matrix::from_fn(size, |_, _| rng.random_range(values.clone()))
        .expect("fixture size must be in 1..=Matrix::MAX_SIZE")
}

/// Assert `actual` matches `expected` element-wise within relative
/// tolerance `rtol`.
///
/// Lengths must match exactly. Each pair is compared with
/// [`approx::relative_eq!`], so identical values (including zeros) always
/// pass.
#[track_caller]
pub fn assert_allclose(expected: &[f64], actual: &[f64], rtol: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "length mismatch: expected {expected:?}, got {actual:?}"
    );
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            approx::relative_eq!(*e, *a, max_relative = rtol),
            "element {i} differs beyond rtol {rtol}: expected {e}, got {a}\n\
             expected: {expected:?}\n  actual: {actual:?}"
        );
    }
}
