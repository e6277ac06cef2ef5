//! Benchmark profiles for matlayer.
//!
//! - [`reference_profile`]: 100x100 matrix (10K cells)
//! - [`stress_profile`]: 1000x1000 matrix (1M cells)
//! - [`profile_matrix`]: seeded matrix for a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use matlayer::Matrix;
use matlayer_test_utils::random_float_matrix;

/// A matrix size and the layers to extract from it.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    /// Label used in benchmark ids.
    pub name: &'static str,
    /// Side length of the matrix.
    pub size: usize,
    /// Layer indices to extract; all `< size`.
    pub layers: Vec<usize>,
}

/// 100x100 matrix; first, middle and outer layers.
pub fn reference_profile() -> BenchProfile {
    spread_profile("reference", 100)
}

/// 1000x1000 matrix; first, middle and outer layers.
pub fn stress_profile() -> BenchProfile {
    spread_profile("stress", 1000)
}

fn spread_profile(name: &'static str, size: usize) -> BenchProfile {
    BenchProfile {
        name,
        size,
        layers: vec![0, size / 2, size - 1],
    }
}

/// Seeded `f64` matrix sized for `profile`, values in `[-100, 100)`.
pub fn profile_matrix(profile: &BenchProfile, seed: u64) -> Matrix<f64> {
    random_float_matrix(profile.size, -100.0..100.0, seed)
}
