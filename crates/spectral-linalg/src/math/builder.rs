use crate::error::Result;
use crate::math::{Matrix, Vector};

/// Collects rows one at a time and validates them on [`MatrixBuilder::build`].
///
/// ```
/// use spectral_linalg::math::{MatrixBuilder, Vector};
///
/// let m = MatrixBuilder::new()
///     .add_row(Vector::from_vec(vec![1.0, 2.0]))
///     .add_row(Vector::from_vec(vec![3.0, 4.0]))
///     .build()
///     .unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatrixBuilder<T> {
    rows: Vec<Vector<T>>,
}

impl<T> MatrixBuilder<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(mut self, row: Vector<T>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: Vector<T>) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fails with `InvalidShape` if the rows do not all have the same length.
    pub fn build(self) -> Result<Matrix<T>> {
        Matrix::from_rows(self.rows)
    }
}
