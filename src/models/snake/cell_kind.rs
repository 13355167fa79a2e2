/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Snake,
    Food,
    /// Result of probing a position off the board. Never stored in the grid.
    Outside,
}
