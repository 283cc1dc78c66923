//! Gauss-Jordan inversion with partial pivoting.
//!
//! Elimination always runs in `f64`, so integer matrices get a real
//! inverse instead of a truncated one.

use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Multiplicative inverse of a square, non-singular matrix.
    ///
    /// Fails with `NotSquare` for rectangular input and `NotInvertible`
    /// when a pivot column has no non-zero candidate.
    pub fn inverse(&self) -> Result<Matrix<f64>> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                op: "inverse",
                size: self.size(),
            });
        }
        let a = self.to_f64().to_nested();
        let rows = gauss_jordan(a)?;
        Matrix::from_nested(rows)
    }

    /// `self * other^-1`.
    pub fn mat_div(&self, other: &Matrix<T>) -> Result<Matrix<f64>> {
        self.to_f64().mat_mul(&other.inverse()?)
    }

    /// Solves `self * x = rhs` for `x` through the inverse.
    pub fn solve(&self, rhs: &Matrix<T>) -> Result<Matrix<f64>> {
        self.inverse()?.mat_mul(&rhs.to_f64())
    }
}

/// Inverts the square row-major `a` in place of an identity matrix.
fn gauss_jordan(mut a: Vec<Vec<f64>>) -> Result<Vec<Vec<f64>>> {
    let n = a.len();
    let mut inv: Vec<Vec<f64>> = (0..n)
        .map(|r| (0..n).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
        .collect();

    for k in 0..n {
        // Partial pivoting: largest magnitude in column k at or below the diagonal.
        let mut pivot = k;
        let mut max_abs = a[k][k].abs();
        for j in (k + 1)..n {
            let v = a[j][k].abs();
            if v > max_abs {
                pivot = j;
                max_abs = v;
            }
        }
        if max_abs == 0.0 {
            log::debug!("Pivot column {} is zero, matrix is singular", k);
            return Err(LinalgError::NotInvertible { column: k });
        }
        if pivot != k {
            log::trace!("Swapping rows {} and {}", pivot, k);
            a.swap(pivot, k);
            inv.swap(pivot, k);
        }

        let akk = a[k][k];
        for ii in 0..n {
            if ii == k {
                continue;
            }
            let q = a[ii][k] / akk;
            a[ii][k] = 0.0;
            for j in (k + 1)..n {
                let delta = a[k][j] * q;
                a[ii][j] -= delta;
            }
            for j in 0..n {
                let delta = inv[k][j] * q;
                inv[ii][j] -= delta;
            }
        }

        for j in (k + 1)..n {
            a[k][j] /= akk;
        }
        for j in 0..n {
            inv[k][j] /= akk;
        }
    }

    log::debug!("Inverted {}x{} matrix", n, n);
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss_jordan_needs_pivot_swap() {
        // a[0][0] == 0 forces a row exchange on the first column.
        let inv = gauss_jordan(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(inv, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_gauss_jordan_reports_singular_column() {
        let err = gauss_jordan(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap_err();
        assert_eq!(err, LinalgError::NotInvertible { column: 1 });
    }

    #[test]
    fn test_gauss_jordan_empty() {
        assert!(gauss_jordan(Vec::new()).unwrap().is_empty());
    }
}
