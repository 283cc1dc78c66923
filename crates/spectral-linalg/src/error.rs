use std::error::Error;
use std::fmt;

use crate::math::Size;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors raised by vector, matrix and decomposition operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Binary operation on operands with incompatible shapes.
    DimensionMismatch {
        op: &'static str,
        left: Size,
        right: Size,
    },
    /// Single row/column index outside `[0, bound)`.
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    /// Slice `[start, end)` not contained in `[0, bound)`.
    SliceOutOfRange {
        axis: Axis,
        start: usize,
        end: usize,
        bound: usize,
    },
    /// Buffer or row lengths do not fit the requested shape.
    InvalidShape { rows: usize, cols: usize, len: usize },
    NotSquare { op: &'static str, size: Size },
    /// Pivot column with zero maximum magnitude during elimination.
    NotInvertible { column: usize },
    DivisionByZero,
    /// Integer result outside the range of the element type.
    Overflow { op: &'static str },
    NoConvergence { index: usize, iterations: usize },
    Unimplemented(&'static str),
}

/// Which index of a matrix an out-of-range error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
    Element,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
            Axis::Element => write!(f, "element"),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { op, left, right } => write!(
                f,
                "dimension mismatch in {}: {} is not compatible with {}",
                op, left, right
            ),
            LinalgError::IndexOutOfRange { axis, index, bound } => {
                write!(f, "invalid {} {} for 0..{}", axis, index, bound)
            }
            LinalgError::SliceOutOfRange {
                axis,
                start,
                end,
                bound,
            } => write!(
                f,
                "{} slice {}..{} out of range for 0..{}",
                axis, start, end, bound
            ),
            LinalgError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            LinalgError::NotSquare { op, size } => {
                write!(f, "{} requires a square matrix, got {}", op, size)
            }
            LinalgError::NotInvertible { column } => write!(
                f,
                "matrix is not regular: pivot column {} has no non-zero entry",
                column
            ),
            LinalgError::DivisionByZero => write!(f, "integer division by zero"),
            LinalgError::Overflow { op } => write!(f, "integer overflow in {}", op),
            LinalgError::NoConvergence { index, iterations } => write!(
                f,
                "eigenvalue {} did not converge after {} iterations",
                index, iterations
            ),
            LinalgError::Unimplemented(what) => write!(f, "{} is not implemented", what),
        }
    }
}

impl Error for LinalgError {}
