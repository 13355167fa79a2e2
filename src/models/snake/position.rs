use super::direction::Direction;

/// A `(row, column)` cell coordinate. Values outside the board are allowed so
/// that a candidate head can be probed before the move is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[must_use]
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn translate(self, direction: Direction) -> Self {
        Self {
            row: self.row + direction.row_offset(),
            column: self.column + direction.column_offset(),
        }
    }

    /// Grid indices for this position, or `None` if it lies outside a
    /// `rows x columns` board.
    #[must_use]
    pub fn to_index(self, rows: usize, columns: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        if row < rows && column < columns {
            Some((row, column))
        } else {
            None
        }
    }
}
