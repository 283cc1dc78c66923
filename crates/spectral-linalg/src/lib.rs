//! spectral-linalg: dense vectors and matrices with two classic decompositions.
//!
//! This crate provides generic `Vector` / `Matrix` containers with elementwise
//! arithmetic, matrix products and slicing, Gauss-Jordan inversion with
//! partial pivoting, and the symmetric eigenvalue decomposition
//! (Householder tridiagonalization followed by implicit-shift QL).
//!
//! Everything is synchronous and allocation-only; the only configurable
//! behaviour lives in [`config::SolverConfig`].
pub mod config;
pub mod decomposition;
pub mod error;
pub mod math;

pub use config::SolverConfig;
pub use decomposition::EigenvalueDecomposition;
pub use error::{LinalgError, Result};
pub use math::{Matrix, MatrixBuilder, Scalar, Selector, Size, Vector};
