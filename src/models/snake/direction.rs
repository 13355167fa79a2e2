/// Heading of the snake on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const VARIANTS: &'static [Direction] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row, column)` offset of one step in this direction.
    #[must_use]
    pub fn value(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[must_use]
    pub fn row_offset(self) -> i32 {
        self.value().0
    }

    #[must_use]
    pub fn column_offset(self) -> i32 {
        self.value().1
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.value(), (-1, 0));
        assert_eq!(Direction::Down.value(), (1, 0));
        assert_eq!(Direction::Left.value(), (0, -1));
        assert_eq!(Direction::Right.value(), (0, 1));
        assert_eq!(Direction::Left.row_offset(), 0);
        assert_eq!(Direction::Left.column_offset(), -1);
    }

    #[test]
    fn test_opposite_negates_offsets() {
        for direction in Direction::VARIANTS {
            let (row, column) = direction.value();
            assert_eq!(direction.opposite().value(), (-row, -column));
            assert_eq!(direction.opposite().opposite(), *direction);
            assert_ne!(direction.opposite(), *direction);
        }
    }
}
