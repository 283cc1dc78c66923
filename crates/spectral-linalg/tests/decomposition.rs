//! Integration tests for Gauss-Jordan inversion and the symmetric eigendecomposition.

use spectral_linalg::decomposition::EigenvalueDecomposition;
use spectral_linalg::math::Matrix;
use spectral_linalg::{LinalgError, SolverConfig};

const TOL: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
    Matrix::from_nested(rows).expect("valid matrix literal")
}

/// Deterministic symmetric test matrix: B + B^T for a fixed pseudo-random B.
fn symmetric(n: usize) -> Matrix<f64> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let b = Matrix::from_fn(n, n, |_, _| {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 2000) as f64 / 100.0 - 10.0
    });
    &b + &b.transpose()
}

// ---------------------------------------------------------------------------
// Inversion
// ---------------------------------------------------------------------------

#[test]
fn inverse_of_2x2() {
    init_logger();
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let inv = a.inverse().unwrap();
    assert!(inv.approx_eq(&m(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]), TOL));
}

#[test]
fn inverse_times_matrix_is_identity() {
    init_logger();
    let a = m(vec![
        vec![2.0, -1.0, 0.0, 3.0],
        vec![1.0, 4.0, -2.0, 0.5],
        vec![0.0, 3.0, 5.0, -1.0],
        vec![7.0, 0.0, 1.0, 2.0],
    ]);
    let inv = a.inverse().unwrap();
    assert!(a.mat_mul(&inv).unwrap().approx_eq(&Matrix::identity(4), TOL));
    assert!(inv.mat_mul(&a).unwrap().approx_eq(&Matrix::identity(4), TOL));
}

#[test]
fn inverse_of_integer_matrix_is_promoted() {
    let a = Matrix::from_nested(vec![vec![2, 0], vec![0, 4]]).unwrap();
    let inv = a.inverse().unwrap();
    assert_eq!(inv, m(vec![vec![0.5, 0.0], vec![0.0, 0.25]]));
}

#[test]
fn inverse_of_singular_matrix_fails() {
    let zero_row = m(vec![vec![1.0, 2.0], vec![0.0, 0.0]]);
    assert!(matches!(
        zero_row.inverse(),
        Err(LinalgError::NotInvertible { .. })
    ));

    let repeated = m(vec![
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.0, 1.0, 4.0],
    ]);
    let err = repeated.inverse().unwrap_err();
    assert!(err.to_string().contains("not regular"));
}

#[test]
fn inverse_requires_square() {
    assert!(matches!(
        Matrix::<f64>::zeros(2, 3).inverse(),
        Err(LinalgError::NotSquare { op: "inverse", .. })
    ));
}

#[test]
fn solve_and_mat_div() {
    let a = m(vec![vec![3.0, 1.0], vec![1.0, 2.0]]);
    let b = m(vec![vec![9.0], vec![8.0]]);
    let x = a.solve(&b).unwrap();
    assert!(x.approx_eq(&m(vec![vec![2.0], vec![3.0]]), TOL));

    let q = a.mat_div(&a).unwrap();
    assert!(q.approx_eq(&Matrix::identity(2), TOL));
}

// ---------------------------------------------------------------------------
// Symmetric eigendecomposition
// ---------------------------------------------------------------------------

#[test]
fn eigen_of_diagonal_2x2() {
    init_logger();
    let a = m(vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
    let eig = EigenvalueDecomposition::new(&a).unwrap();
    assert_eq!(eig.size(), 2);
    assert!((eig.eigenvalues()[0] - 2.0).abs() < TOL);
    assert!((eig.eigenvalues()[1] - 3.0).abs() < TOL);
    assert!(eig
        .eigenvector_matrix()
        .approx_eq(&m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]), TOL));
}

#[test]
fn eigen_of_identity() {
    for n in [1, 2, 4] {
        let eig = EigenvalueDecomposition::new(&Matrix::<f64>::identity(n)).unwrap();
        assert!(eig.eigenvalues().iter().all(|&d| (d - 1.0).abs() < TOL));
        assert_eq!(eig.eigenvector_matrix(), Matrix::identity(n));
        assert_eq!(eig.iterations(), 0);
    }
}

#[test]
fn eigen_reconstruction_and_ordering() {
    init_logger();
    for n in [1, 2, 3, 5, 8] {
        let a = symmetric(n);
        let eig = EigenvalueDecomposition::new(&a).unwrap();
        let d = eig.eigenvalues();
        assert_eq!(d.len(), n);
        for w in d.windows(2) {
            assert!(w[0] <= w[1], "eigenvalues not ascending: {:?}", d);
        }

        let v = eig.eigenvector_matrix();
        let av = a.mat_mul(&v).unwrap();
        let vd = v.mat_mul(&eig.eigenvalue_matrix()).unwrap();
        assert!(av.approx_eq(&vd, 1e-8), "A*V != V*D for n = {}", n);

        let trace: f64 = d.iter().sum();
        assert!((trace - a.trace().unwrap()).abs() < 1e-8);
    }
}

#[test]
fn eigen_known_values() {
    let a = m(vec![vec![2.0, 1.0], vec![1.0, 2.0]]);
    let eig = EigenvalueDecomposition::new(&a).unwrap();
    assert!((eig.eigenvalues()[0] - 1.0).abs() < TOL);
    assert!((eig.eigenvalues()[1] - 3.0).abs() < TOL);

    let vectors = eig.eigenvectors();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert!((vectors[1][0].abs() - s).abs() < TOL);
    assert!((vectors[1][0] - vectors[1][1]).abs() < TOL);
    assert!((vectors[0][0] + vectors[0][1]).abs() < TOL);
}

#[test]
fn eigen_of_integer_matrix() {
    let a = Matrix::from_nested(vec![vec![4, 1], vec![1, 4]]).unwrap();
    let eig = EigenvalueDecomposition::new(&a).unwrap();
    assert!((eig.eigenvalues()[0] - 3.0).abs() < TOL);
    assert!((eig.eigenvalues()[1] - 5.0).abs() < TOL);
}

#[test]
fn eigen_inverse_vectors_are_transpose() {
    let a = symmetric(4);
    let eig = EigenvalueDecomposition::new(&a).unwrap();
    let v = eig.eigenvector_matrix();
    assert_eq!(eig.eigenvector_matrix_inv(), v.transpose());
    // V D V^T reproduces A
    let rebuilt = v
        .mat_mul(&eig.eigenvalue_matrix())
        .unwrap()
        .mat_mul(&eig.eigenvector_matrix_inv())
        .unwrap();
    assert!(rebuilt.approx_eq(&a, 1e-8));
}

#[test]
fn eigen_rejects_non_square_and_non_symmetric() {
    assert!(matches!(
        EigenvalueDecomposition::new(&Matrix::<f64>::zeros(2, 3)),
        Err(LinalgError::NotSquare { .. })
    ));
    let a = m(vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
    assert!(matches!(
        EigenvalueDecomposition::new(&a),
        Err(LinalgError::Unimplemented(_))
    ));
}

#[test]
fn eigen_symmetry_tolerance_from_config() {
    let a = m(vec![vec![1.0, 2.0], vec![2.0 + 1e-12, 1.0]]);
    assert!(EigenvalueDecomposition::new(&a).is_err());
    let config = SolverConfig {
        symmetry_tolerance: 1e-9,
        ..SolverConfig::default()
    };
    let eig = EigenvalueDecomposition::with_config(&a, &config).unwrap();
    assert!((eig.eigenvalues()[0] + 1.0).abs() < 1e-9);
}

#[test]
fn eigen_of_empty_matrix() {
    let eig = EigenvalueDecomposition::new(&Matrix::<f64>::empty()).unwrap();
    assert!(eig.eigenvalues().is_empty());
    assert!(eig.eigenvector_matrix().is_empty());
    assert!(eig.eigenvectors().is_empty());
}
