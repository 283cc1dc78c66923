use std::fmt;
use std::ops::{Add, Sub};

/// Dimension of a matrix as `(rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

impl Size {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn transposed(&self) -> Size {
        Size::new(self.cols, self.rows)
    }

    pub fn scale(&self, factor: usize) -> Size {
        Size::new(self.rows * factor, self.cols * factor)
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
}

impl From<(usize, usize)> for Size {
    fn from((rows, cols): (usize, usize)) -> Self {
        Size::new(rows, cols)
    }
}

impl From<Size> for (usize, usize) {
    fn from(size: Size) -> Self {
        (size.rows, size.cols)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.rows + rhs.rows, self.cols + rhs.cols)
    }
}

// Saturates at zero instead of underflowing.
impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(
            self.rows.saturating_sub(rhs.rows),
            self.cols.saturating_sub(rhs.cols),
        )
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}
