//! Square matrices and their concentric layers.
//!
//! This crate defines [`Matrix`], an owned row-major square matrix, and
//! [`extract_layer`], which reads the `n`-th layer of a matrix as a flat
//! sequence: the first `n + 1` cells of row `n`, then the cells of
//! column `n` above the diagonal from bottom to top.
//!
//! # Strategies
//!
//! [`Traversal`] selects how the sequence is built:
//!
//! - [`Traversal::Accumulate`]: index loops appending into one buffer
//! - [`Traversal::SliceReverse`]: half-row slice plus reversed half-column
//!
//! Both yield identical output; [`extract_layer`] uses the default.
//!
//! # Errors
//!
//! Shape and index preconditions are checked up front and reported as
//! [`MatrixError`]. Extraction never reads out of bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layer;
pub mod matrix;

pub use error::MatrixError;
pub use layer::{
    extract_layer, extract_layer_with, layer_coords, layer_len, LayerCoords, Traversal,
    MAX_LAYER,
};
pub use matrix::Matrix;
