/// Region of a matrix targeted by the selective helpers
/// (`Matrix::map_selected`, `Matrix::replace`, `Matrix::all`, `Matrix::any`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Diagonal,
    OffDiagonal,
    /// Diagonal and everything below it.
    Lower,
    StrictLower,
    /// Diagonal and everything above it.
    Upper,
    StrictUpper,
}

impl Selector {
    /// Whether the cell at `(row, col)` belongs to this region.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            Selector::All => true,
            Selector::Diagonal => row == col,
            Selector::OffDiagonal => row != col,
            Selector::Lower => col <= row,
            Selector::StrictLower => col < row,
            Selector::Upper => col >= row,
            Selector::StrictUpper => col > row,
        }
    }
}
