use std::fmt;
use std::ops::{Index, IndexMut, Neg, RangeBounds};

use crate::error::{Axis, LinalgError, Result};
use crate::math::vector::checked_add;
use crate::math::{Scalar, Selector, Size, Vector};

/// Rectangular grid of numeric elements stored as a sequence of row vectors.
///
/// Every row holds exactly `ncols()` elements. The only matrix with a zero
/// dimension is the empty `0 x 0` matrix; constructors normalise any other
/// zero-sized request to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
    cols: usize,
}

impl<T> Matrix<T> {
    /// The `0 x 0` matrix.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            cols: 0,
        }
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let mut data = Vec::with_capacity(rows);
        for r in 0..rows {
            data.push(Vector::from_fn(cols, |c| f(r, c)));
        }
        Self { rows: data, cols }
    }

    /// Builds a matrix from a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols || (rows == 0) != (cols == 0) {
            return Err(LinalgError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        if rows == 0 {
            return Ok(Self::empty());
        }
        let mut iter = data.into_iter();
        let rows_vec = (0..rows)
            .map(|_| iter.by_ref().take(cols).collect::<Vector<T>>())
            .collect();
        Ok(Self {
            rows: rows_vec,
            cols,
        })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Stacks row vectors; all rows must have the same non-zero length.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let cols = first.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            let len = rows.iter().map(|row| row.len()).sum();
            return Err(LinalgError::InvalidShape {
                rows: rows.len(),
                cols,
                len,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Matrix literal from nested lists, one inner list per row.
    pub fn from_nested(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows.into_iter().map(Vector::from_vec).collect())
    }

    /// Wraps a vector as a single-row matrix.
    pub fn row_vector(vector: Vector<T>) -> Self {
        if vector.is_empty() {
            return Self::empty();
        }
        let cols = vector.len();
        Self {
            rows: vec![vector],
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.cols)
    }

    pub fn size(&self) -> Size {
        Size::new(self.nrows(), self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.cols
    }

    pub fn iter_rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Iterates `(row, col, &value)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, v)))
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.nrows() {
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.nrows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Col,
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.rows[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.rows[row][col] = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&Vector<T>> {
        self.check_row(row)?;
        Ok(&self.rows[row])
    }

    /// Replaces a whole row; the new row must have `ncols()` elements.
    pub fn set_row(&mut self, row: usize, values: Vector<T>) -> Result<()> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(LinalgError::DimensionMismatch {
                op: "set_row",
                left: Size::new(1, self.cols),
                right: values.size(),
            });
        }
        self.rows[row] = values;
        Ok(())
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows.iter().map(|row| row.mapv(&mut f)).collect(),
            cols: self.cols,
        }
    }

    /// Calls `action(value, row, col)` for every cell inside `which`.
    pub fn for_each_indexed<F>(&self, which: Selector, mut action: F)
    where
        F: FnMut(&T, usize, usize),
    {
        for (r, c, v) in self.indexed_iter() {
            if which.contains(r, c) {
                action(v, r, c);
            }
        }
    }

    pub fn all<F>(&self, which: Selector, mut check: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.indexed_iter()
            .filter(|(r, c, _)| which.contains(*r, *c))
            .all(|(_, _, v)| check(v))
    }

    pub fn any<F>(&self, which: Selector, mut check: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.indexed_iter()
            .filter(|(r, c, _)| which.contains(*r, *c))
            .any(|(_, _, v)| check(v))
    }
}

impl<T: Clone> Matrix<T> {
    pub fn column(&self, col: usize) -> Result<Vector<T>> {
        self.check_col(col)?;
        Ok(self.rows.iter().map(|row| row[col].clone()).collect())
    }

    pub fn set_column(&mut self, col: usize, values: &Vector<T>) -> Result<()> {
        self.check_col(col)?;
        if values.len() != self.nrows() {
            return Err(LinalgError::DimensionMismatch {
                op: "set_column",
                left: Size::new(self.nrows(), 1),
                right: Size::new(values.len(), 1),
            });
        }
        for (row, value) in self.rows.iter_mut().zip(values.iter()) {
            row[col] = value.clone();
        }
        Ok(())
    }

    /// Builds a matrix whose columns are the given vectors.
    pub fn from_columns(columns: Vec<Vector<T>>) -> Result<Self> {
        Ok(Self::from_rows(columns)?.transpose())
    }

    /// Wraps a vector as a single-column matrix.
    pub fn column_vector(vector: Vector<T>) -> Self {
        Self::row_vector(vector).transpose()
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.nrows(), |r, c| self.rows[c][r].clone())
    }

    /// Contiguous block of rows as a new matrix.
    pub fn rows<R>(&self, range: R) -> Result<Matrix<T>>
    where
        R: RangeBounds<usize>,
    {
        self.slice(range, ..)
    }

    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix<T>> {
        let mut rows = Vec::with_capacity(indices.len());
        for &idx in indices {
            rows.push(self.row(idx)?.clone());
        }
        Matrix::from_rows(rows)
    }

    pub fn select_columns<R>(&self, range: R) -> Result<Matrix<T>>
    where
        R: RangeBounds<usize>,
    {
        self.slice(.., range)
    }

    /// Copies the block `rows x cols` into a new matrix.
    pub fn slice<R, C>(&self, rows: R, cols: C) -> Result<Matrix<T>>
    where
        R: RangeBounds<usize>,
        C: RangeBounds<usize>,
    {
        let (r0, r1) = resolve_range(&rows, self.nrows(), Axis::Row)?;
        let (c0, c1) = resolve_range(&cols, self.cols, Axis::Col)?;
        Ok(Matrix::from_fn(r1 - r0, c1 - c0, |r, c| {
            self.rows[r0 + r][c0 + c].clone()
        }))
    }

    /// Overwrites the block starting at `(row, col)` with `block`.
    pub fn set_slice(&mut self, row: usize, col: usize, block: &Matrix<T>) -> Result<()> {
        let (rows, cols) = block.shape();
        let row_end = checked_end(row, rows, self.nrows(), Axis::Row)?;
        let col_end = checked_end(col, cols, self.cols, Axis::Col)?;
        check_slice(row, row_end, self.nrows(), Axis::Row)?;
        check_slice(col, col_end, self.cols, Axis::Col)?;
        for (r, src) in block.rows.iter().enumerate() {
            for (c, value) in src.iter().enumerate() {
                self.rows[row + r][col + c] = value.clone();
            }
        }
        Ok(())
    }

    /// Removes `row` and `col`.
    pub fn first_minor(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        self.check_row(row)?;
        self.check_col(col)?;
        let mut rows = self.rows.clone();
        rows.remove(row);
        for r in rows.iter_mut() {
            r.remove(col);
        }
        if rows.first().map_or(true, |r| r.is_empty()) {
            return Ok(Matrix::empty());
        }
        Ok(Matrix {
            rows,
            cols: self.cols - 1,
        })
    }

    /// Appends the rows of `other` below this matrix.
    pub fn row_append(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.cols != other.cols {
            return Err(LinalgError::DimensionMismatch {
                op: "row_append",
                left: self.size(),
                right: other.size(),
            });
        }
        let mut rows = self.rows.clone();
        rows.extend(other.rows.iter().cloned());
        Ok(Matrix {
            rows,
            cols: self.cols,
        })
    }

    /// Appends the columns of `other` to the right of this matrix.
    pub fn col_append(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.nrows() != other.nrows() {
            return Err(LinalgError::DimensionMismatch {
                op: "col_append",
                left: self.size(),
                right: other.size(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.iter().chain(b.iter()).cloned().collect())
            .collect();
        Ok(Matrix {
            rows,
            cols: self.cols + other.cols,
        })
    }

    /// Applies `action` to the cells inside `which`, copying the rest.
    pub fn map_selected<F>(&self, which: Selector, mut action: F) -> Matrix<T>
    where
        F: FnMut(&T) -> T,
    {
        Matrix::from_fn(self.nrows(), self.cols, |r, c| {
            let v = &self.rows[r][c];
            if which.contains(r, c) {
                action(v)
            } else {
                v.clone()
            }
        })
    }

    /// Replaces cells inside `which` for which `check` holds.
    pub fn replace<F>(&self, which: Selector, replacement: T, mut check: F) -> Matrix<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.map_selected(which, |v| {
            if check(v) {
                replacement.clone()
            } else {
                v.clone()
            }
        })
    }

    /// Row-major copy of all elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.iter().flat_map(|row| row.iter().cloned()).collect()
    }

    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::one())
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// Square matrix with `values` on the diagonal.
    pub fn diagonal(values: &[T]) -> Self {
        let n = values.len();
        Self::from_fn(n, n, |r, c| if r == c { values[r] } else { T::zero() })
    }

    /// `value` times the `n x n` identity.
    pub fn scalar(n: usize, value: T) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { value } else { T::zero() })
    }

    fn check_same_size(&self, other: &Matrix<T>, op: &'static str) -> Result<()> {
        if self.size() != other.size() {
            return Err(LinalgError::DimensionMismatch {
                op,
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    fn zip_rows<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    {
        self.check_same_size(other, op)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix {
            rows,
            cols: self.cols,
        })
    }

    fn zip_rows_assign<F>(&mut self, other: &Matrix<T>, op: &'static str, f: F) -> Result<()>
    where
        F: Fn(&mut Vector<T>, &Vector<T>) -> Result<()>,
    {
        self.check_same_size(other, op)?;
        for (a, b) in self.rows.iter_mut().zip(other.rows.iter()) {
            f(a, b)?;
        }
        Ok(())
    }

    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "add", Vector::try_add)
    }

    pub fn try_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "sub", Vector::try_sub)
    }

    /// Elementwise (Hadamard) product; see [`Matrix::mat_mul`] for the
    /// matrix product.
    pub fn try_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "mul", Vector::try_mul)
    }

    pub fn try_div(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "div", Vector::try_div)
    }

    pub fn try_rem(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "rem", Vector::try_rem)
    }

    pub fn try_pow(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(other, "pow", Vector::try_pow)
    }

    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "add_assign", Vector::try_add_assign)
    }

    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "sub_assign", Vector::try_sub_assign)
    }

    pub fn try_mul_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "mul_assign", Vector::try_mul_assign)
    }

    pub fn try_div_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "div_assign", Vector::try_div_assign)
    }

    pub fn try_rem_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "rem_assign", Vector::try_rem_assign)
    }

    pub fn try_pow_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.zip_rows_assign(other, "pow_assign", Vector::try_pow_assign)
    }

    /// Panicking form of [`Matrix::try_pow`].
    pub fn pow(&self, other: &Matrix<T>) -> Matrix<T> {
        match self.try_pow(other) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }

    /// Standard matrix product; requires `self.ncols() == other.nrows()`.
    pub fn mat_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.nrows() {
            return Err(LinalgError::DimensionMismatch {
                op: "mat_mul",
                left: self.size(),
                right: other.size(),
            });
        }
        let columns = other.transpose();
        let mut rows = Vec::with_capacity(self.nrows());
        for row in self.rows.iter() {
            let out = columns
                .rows
                .iter()
                .map(|col| row.dot(col))
                .collect::<Result<Vector<T>>>()?;
            rows.push(out);
        }
        Matrix::from_rows(rows)
    }

    /// Row-by-row dot product, returned as a column matrix.
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_size(other, "dot")?;
        let values = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.dot(b))
            .collect::<Result<Vector<T>>>()?;
        Ok(Matrix::column_vector(values))
    }

    /// Row-by-row cross product of two `n x 3` matrices.
    pub fn cross(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_size(other, "cross")?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.cross(b))
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_rows(rows)
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                op: "trace",
                size: self.size(),
            });
        }
        (0..self.nrows()).try_fold(T::zero(), |acc, i| checked_add(acc, self.rows[i][i]))
    }

    /// Square and `|a[i][j] - a[j][i]| <= tolerance` everywhere.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        (0..n).all(|i| {
            (i + 1..n).all(|j| {
                (self.rows[i][j].as_f64() - self.rows[j][i].as_f64()).abs() <= tolerance
            })
        })
    }

    pub fn elementwise_eq(&self, other: &Matrix<T>) -> Result<Matrix<bool>> {
        self.check_same_size(other, "elementwise_eq")?;
        Ok(Matrix::from_fn(self.nrows(), self.cols, |r, c| {
            self.rows[r][c] == other.rows[r][c]
        }))
    }

    /// Same shape and every pair of elements within `tolerance`.
    pub fn approx_eq(&self, other: &Matrix<T>, tolerance: f64) -> bool {
        self.size() == other.size()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| {
                    a.iter()
                        .zip(b.iter())
                        .all(|(x, y)| (x.as_f64() - y.as_f64()).abs() <= tolerance)
                })
    }

    pub fn to_f64(&self) -> Matrix<f64> {
        self.mapv(|v| v.as_f64())
    }
}

/// Turns a `RangeBounds` into a checked half-open `[start, end)` within `[0, bound)`.
fn resolve_range<R>(range: &R, bound: usize, axis: Axis) -> Result<(usize, usize)>
where
    R: RangeBounds<usize>,
{
    use std::ops::Bound;

    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => checked_end(s, 1, bound, axis)?,
    };

    let end = match range.end_bound() {
        Bound::Unbounded => bound,
        Bound::Included(&e) => checked_end(e, 1, bound, axis)?,
        Bound::Excluded(&e) => e,
    };

    check_slice(start, end, bound, axis)?;
    Ok((start, end))
}

/// `start + len`, or `SliceOutOfRange` when that overflows `usize`.
fn checked_end(start: usize, len: usize, bound: usize, axis: Axis) -> Result<usize> {
    start
        .checked_add(len)
        .ok_or(LinalgError::SliceOutOfRange {
            axis,
            start,
            end: usize::MAX,
            bound,
        })
}

fn check_slice(start: usize, end: usize, bound: usize, axis: Axis) -> Result<()> {
    if start > end || end > bound {
        return Err(LinalgError::SliceOutOfRange {
            axis,
            start,
            end,
            bound,
        });
    }
    Ok(())
}

impl_elementwise_ops!(Matrix);

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.mapv(|&v| -v)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}
