//! Test utilities for matlayer development.
//!
//! Seeded random matrices and a relative-tolerance slice comparison,
//! shared by the integration tests and benchmarks.

pub mod fixtures;

pub use fixtures::{
    assert_allclose, random_float_matrix, random_int_matrix, random_size_and_layer, rng,
    DEFAULT_RTOL,
};
