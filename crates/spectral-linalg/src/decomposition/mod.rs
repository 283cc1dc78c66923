//! Matrix decompositions built on the `math` containers.
//!
//! `inverse` adds Gauss-Jordan inversion (`Matrix::inverse`, `mat_div`,
//! `solve`) and `eigen` provides [`EigenvalueDecomposition`] for symmetric
//! matrices.
pub mod eigen;
pub mod inverse;

pub use eigen::EigenvalueDecomposition;
