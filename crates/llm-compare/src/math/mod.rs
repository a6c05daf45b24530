//! Minimal matrix container for score tables.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
