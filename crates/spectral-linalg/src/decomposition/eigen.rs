//! Eigendecomposition of real symmetric matrices.
//!
//! Householder reduction to tridiagonal form followed by the implicit-shift
//! QL iteration (the EISPACK `tred2`/`tql2` pair as used in JAMA). The
//! eigenvalues come out sorted ascending with the eigenvector columns
//! permuted to match.

use crate::config::SolverConfig;
use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Scalar, Vector};

/// Eigenvalues and eigenvectors of a symmetric matrix.
///
/// Computed once from a snapshot of the input and immutable afterwards.
#[derive(Clone, Debug)]
pub struct EigenvalueDecomposition {
    size: usize,
    /// Eigenvalues; the diagonal during the iteration.
    d: Vec<f64>,
    /// Off-diagonal of the tridiagonal form, zero after convergence.
    e: Vec<f64>,
    /// Row-major; column `j` is the eigenvector of `d[j]`.
    v: Vec<Vec<f64>>,
    iterations: usize,
}

impl EigenvalueDecomposition {
    /// Decomposes `matrix` with the default [`SolverConfig`].
    pub fn new<T: Scalar>(matrix: &Matrix<T>) -> Result<Self> {
        Self::with_config(matrix, &SolverConfig::default())
    }

    pub fn with_config<T: Scalar>(matrix: &Matrix<T>, config: &SolverConfig) -> Result<Self> {
        if !matrix.is_square() {
            return Err(LinalgError::NotSquare {
                op: "eigendecomposition",
                size: matrix.size(),
            });
        }
        if !matrix.is_symmetric(config.symmetry_tolerance) {
            return Err(LinalgError::Unimplemented("non-symmetric eigendecomposition"));
        }

        let size = matrix.nrows();
        let mut decomposition = EigenvalueDecomposition {
            size,
            d: vec![0.0; size],
            e: vec![0.0; size],
            v: matrix.to_f64().to_nested(),
            iterations: 0,
        };
        if size == 0 {
            return Ok(decomposition);
        }

        decomposition.tridiagonalize();
        decomposition.diagonalize(config)?;
        decomposition.sort();

        log::debug!(
            "Symmetric eigendecomposition of {}x{} matrix finished after {} QL steps",
            size,
            size,
            decomposition.iterations
        );
        Ok(decomposition)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of implicit QL steps taken.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.d
    }

    /// `diag(eigenvalues)`.
    pub fn eigenvalue_matrix(&self) -> Matrix<f64> {
        Matrix::diagonal(&self.d)
    }

    /// Matrix `V` whose column `j` is the eigenvector of `eigenvalues()[j]`,
    /// so that `A * V == V * diag(d)`.
    pub fn eigenvector_matrix(&self) -> Matrix<f64> {
        Matrix::from_fn(self.size, self.size, |r, c| self.v[r][c])
    }

    /// `V^-1`, which is `V^T` because `V` is orthogonal.
    pub fn eigenvector_matrix_inv(&self) -> Matrix<f64> {
        Matrix::from_fn(self.size, self.size, |r, c| self.v[c][r])
    }

    /// One unit eigenvector per eigenvalue, in the same order.
    pub fn eigenvectors(&self) -> Vec<Vector<f64>> {
        (0..self.size)
            .map(|j| Vector::from_fn(self.size, |i| self.v[i][j]))
            .collect()
    }

    /// Householder reduction to tridiagonal form, accumulating the
    /// orthogonal transformation in `v`.
    fn tridiagonalize(&mut self) {
        let n = self.size;
        let (d, e, v) = (&mut self.d, &mut self.e, &mut self.v);

        for j in 0..n {
            d[j] = v[n - 1][j];
        }

        for i in (1..n).rev() {
            // Scale to avoid under/overflow.
            let mut scale = 0.0;
            let mut h = 0.0;
            for k in 0..i {
                scale += d[k].abs();
            }
            if scale == 0.0 {
                e[i] = d[i - 1];
                for j in 0..i {
                    d[j] = v[i - 1][j];
                    v[i][j] = 0.0;
                    v[j][i] = 0.0;
                }
            } else {
                // Generate the Householder vector.
                for k in 0..i {
                    d[k] /= scale;
                    h += d[k] * d[k];
                }
                let mut f = d[i - 1];
                let mut g = h.sqrt();
                if f > 0.0 {
                    g = -g;
                }
                e[i] = scale * g;
                h -= f * g;
                d[i - 1] = f - g;
                for ej in e.iter_mut().take(i) {
                    *ej = 0.0;
                }

                // Apply the similarity transformation to the remaining columns.
                for j in 0..i {
                    f = d[j];
                    v[j][i] = f;
                    g = e[j] + v[j][j] * f;
                    for k in (j + 1)..i {
                        g += v[k][j] * d[k];
                        e[k] += v[k][j] * f;
                    }
                    e[j] = g;
                }
                f = 0.0;
                for j in 0..i {
                    e[j] /= h;
                    f += e[j] * d[j];
                }
                let hh = f / (h + h);
                for j in 0..i {
                    e[j] -= hh * d[j];
                }
                for j in 0..i {
                    f = d[j];
                    g = e[j];
                    for k in j..i {
                        v[k][j] -= f * e[k] + g * d[k];
                    }
                    d[j] = v[i - 1][j];
                    v[i][j] = 0.0;
                }
            }
            d[i] = h;
        }

        // Accumulate transformations.
        for i in 0..n - 1 {
            v[n - 1][i] = v[i][i];
            v[i][i] = 1.0;
            let h = d[i + 1];
            if h != 0.0 {
                for k in 0..=i {
                    d[k] = v[k][i + 1] / h;
                }
                for j in 0..=i {
                    let mut g = 0.0;
                    for k in 0..=i {
                        g += v[k][i + 1] * v[k][j];
                    }
                    for k in 0..=i {
                        v[k][j] -= g * d[k];
                    }
                }
            }
            for k in 0..=i {
                v[k][i + 1] = 0.0;
            }
        }
        for j in 0..n {
            d[j] = v[n - 1][j];
            v[n - 1][j] = 0.0;
        }
        v[n - 1][n - 1] = 1.0;
        e[0] = 0.0;
    }

    /// Implicit-shift QL iteration on the tridiagonal form.
    fn diagonalize(&mut self, config: &SolverConfig) -> Result<()> {
        let n = self.size;
        let eps = config.eps;
        let (d, e, v) = (&mut self.d, &mut self.e, &mut self.v);

        for i in 1..n {
            e[i - 1] = e[i];
        }
        e[n - 1] = 0.0;

        let mut f = 0.0;
        let mut tst1: f64 = 0.0;

        for l in 0..n {
            // Find a small sub-diagonal element. e[n - 1] is zero, so the
            // search never has to look past the last index.
            tst1 = tst1.max(d[l].abs() + e[l].abs());
            let mut m = l;
            while m + 1 < n {
                if e[m].abs() <= eps * tst1 {
                    break;
                }
                m += 1;
            }

            if m > l {
                let mut iter = 0;
                loop {
                    iter += 1;
                    if iter > config.max_iterations {
                        log::warn!(
                            "Eigenvalue {} did not converge within {} iterations",
                            l,
                            config.max_iterations
                        );
                        return Err(LinalgError::NoConvergence {
                            index: l,
                            iterations: config.max_iterations,
                        });
                    }
                    self.iterations += 1;

                    // Compute the implicit shift.
                    let mut g = d[l];
                    let mut p = (d[l + 1] - g) / (2.0 * e[l]);
                    let mut r = p.hypot(1.0);
                    if p < 0.0 {
                        r = -r;
                    }
                    d[l] = e[l] / (p + r);
                    d[l + 1] = e[l] * (p + r);
                    let dl1 = d[l + 1];
                    let mut h = g - d[l];
                    for di in d.iter_mut().skip(l + 2) {
                        *di -= h;
                    }
                    f += h;

                    // Plane rotations from m - 1 down to l.
                    p = d[m];
                    let mut c = 1.0;
                    let mut c2 = c;
                    let mut c3 = c;
                    let el1 = e[l + 1];
                    let mut s = 0.0;
                    let mut s2 = 0.0;
                    for i in (l..m).rev() {
                        c3 = c2;
                        c2 = c;
                        s2 = s;
                        g = c * e[i];
                        h = c * p;
                        r = p.hypot(e[i]);
                        e[i + 1] = s * r;
                        s = e[i] / r;
                        c = p / r;
                        p = c * d[i] - s * g;
                        d[i + 1] = h + s * (c * g + s * d[i]);

                        for row in v.iter_mut() {
                            h = row[i + 1];
                            row[i + 1] = s * row[i] + c * h;
                            row[i] = c * row[i] - s * h;
                        }
                    }
                    p = -s * s2 * c3 * el1 * e[l] / dl1;
                    e[l] = s * p;
                    d[l] = c * p;

                    if e[l].abs() <= eps * tst1 {
                        break;
                    }
                }
                log::trace!("Eigenvalue {} converged after {} QL steps", l, iter);
            }
            d[l] += f;
            e[l] = 0.0;
        }
        Ok(())
    }

    /// Selection sort of the eigenvalues, swapping eigenvector columns in lockstep.
    fn sort(&mut self) {
        let n = self.size;
        for i in 0..n.saturating_sub(1) {
            let mut k = i;
            let mut p = self.d[i];
            for j in (i + 1)..n {
                if self.d[j] < p {
                    k = j;
                    p = self.d[j];
                }
            }
            if k != i {
                log::trace!("Swapping eigenpairs {} and {}", i, k);
                self.d[k] = self.d[i];
                self.d[i] = p;
                for row in self.v.iter_mut() {
                    row.swap(i, k);
                }
            }
        }
    }
}
