use std::{collections::VecDeque, fmt};

use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::{cell_kind::CellKind, direction::Direction, position::Position};

/// Amount of time between two ticks of the game.
pub const MILLIS_BETWEEN_FRAMES: u64 = 175;
/// Board height used by the desktop front end.
pub const DEFAULT_ROWS: usize = 16;
/// Board width used by the desktop front end.
pub const DEFAULT_COLUMNS: usize = 32;
/// Number of cells the snake starts with (fewer on boards narrower than 4).
pub const INITIAL_SNAKE_LENGTH: usize = 3;
/// Max number of direction changes that can wait for the next ticks.
pub const MAX_QUEUED_DIRECTIONS: usize = 2;

type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    InvalidBoardSize { rows: usize, columns: usize },
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::InvalidBoardSize { rows, columns } => {
                write!(f, "Invalid board size {rows}x{columns}")
            }
        }
    }
}

impl std::error::Error for SnakeError {}

/// What happened during a call to [`SnakeGame::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell without growing.
    Moved,
    /// The snake ate food, grew by one cell and new food was placed.
    AteFood,
    /// The snake ate the last food and no empty cell is left.
    Won,
    /// The head ran into a wall ([`CellKind::Outside`]) or the body ([`CellKind::Snake`]).
    Collided(CellKind),
    /// The game had already ended; nothing changed.
    Finished,
}

/// Model of a single snake game session.
///
/// The board grid and the ordered body are kept in sync: every position in
/// the body is a [`CellKind::Snake`] cell and every snake cell is in the body.
/// The grid gives constant time collision probes and the body gives constant
/// time head and tail updates.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    rows: usize,
    columns: usize,
    grid: Vec<Vec<CellKind>>,
    /// Head at the front, tail at the back. Never empty.
    snake: VecDeque<Position>,
    direction: Direction,
    direction_changes: VecDeque<Direction>,
    score: u32,
    game_over: bool,
    game_won: bool,
    rng: StdRng,
}

impl SnakeGame {
    /// Creates a new game on a `rows x columns` board, with food placement
    /// seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either dimension is zero or
    /// does not fit in an `i32` coordinate.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_rng(rows, columns, StdRng::from_entropy())
    }

    /// Same as [`SnakeGame::new`] but food placement is reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either dimension is zero or
    /// does not fit in an `i32` coordinate.
    pub fn with_seed(rows: usize, columns: usize, seed: u64) -> Result<Self> {
        Self::with_rng(rows, columns, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, columns: usize, rng: StdRng) -> Result<Self> {
        if rows == 0
            || columns == 0
            || i32::try_from(rows).is_err()
            || i32::try_from(columns).is_err()
        {
            return Err(SnakeError::InvalidBoardSize { rows, columns });
        }

        let mut game = Self {
            rows,
            columns,
            grid: vec![vec![CellKind::Empty; columns]; rows],
            snake: VecDeque::with_capacity(rows * columns),
            direction: Direction::Right,
            direction_changes: VecDeque::with_capacity(MAX_QUEUED_DIRECTIONS),
            score: 0,
            game_over: false,
            game_won: false,
            rng,
        };
        game.add_snake();
        game.place_food();
        debug!("New {rows}x{columns} snake game");
        Ok(game)
    }

    // Coordinates were checked to fit in i32 when the board was created.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn position_of(row: usize, column: usize) -> Position {
        Position::new(row as i32, column as i32)
    }

    fn add_snake(&mut self) {
        let row = self.rows / 2;
        let length = INITIAL_SNAKE_LENGTH.min(self.columns);
        // column 0 is only used when the board is too narrow for 1..=3
        let first = usize::from(self.columns > INITIAL_SNAKE_LENGTH);
        for column in first..first + length {
            self.add_head(Self::position_of(row, column));
        }
    }

    fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut available = Vec::new();
        for (i, row) in self.grid.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell == CellKind::Empty {
                    available.push((i, j));
                }
            }
        }
        available
    }

    /// Puts food on a uniformly chosen empty cell. A board without empty
    /// cells is the win condition.
    fn place_food(&mut self) {
        let available = self.empty_positions();
        if let Some(&(row, column)) = available.choose(&mut self.rng) {
            self.grid[row][column] = CellKind::Food;
            debug!("Placed food at ({row}, {column})");
        } else {
            warn!("No where left to place food");
            self.game_won = true;
            info!("Game won. Score: {}", self.score);
        }
    }

    fn set_cell(&mut self, position: Position, kind: CellKind) {
        if let Some((row, column)) = position.to_index(self.rows, self.columns) {
            self.grid[row][column] = kind;
        } else {
            warn!("Tried to set {kind:?} outside the board at {position:?}");
        }
    }

    fn add_head(&mut self, position: Position) {
        self.snake.push_front(position);
        self.set_cell(position, CellKind::Snake);
    }

    fn remove_tail(&mut self) {
        if let Some(tail) = self.snake.pop_back() {
            self.set_cell(tail, CellKind::Empty);
        } else {
            debug!("Removed from back but got None");
        }
    }

    /// Direction the snake will have once every queued change is applied.
    fn last_direction(&self) -> Direction {
        self.direction_changes
            .back()
            .copied()
            .unwrap_or(self.direction)
    }

    /// Queues a change of direction for a later tick.
    ///
    /// Returns false (and changes nothing) if two changes are already waiting,
    /// if `direction` is the last queued heading or its reversal, or if the
    /// game has ended.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.is_finished() {
            debug!("Ignoring {direction:?}, game is finished");
            return false;
        }
        if self.direction_changes.len() >= MAX_QUEUED_DIRECTIONS {
            debug!("Ignoring {direction:?}, direction queue is full");
            return false;
        }
        let last = self.last_direction();
        if direction == last || direction == last.opposite() {
            debug!("Ignoring {direction:?}, last heading is {last:?}");
            return false;
        }
        self.direction_changes.push_back(direction);
        true
    }

    /// Classifies what the head would land on at `position`. The current tail
    /// counts as empty because it moves away during the same tick.
    fn will_hit(&self, position: Position) -> CellKind {
        if position.to_index(self.rows, self.columns).is_none() {
            return CellKind::Outside;
        }
        if position == self.get_tail() {
            return CellKind::Empty;
        }
        self.get_cell(position)
    }

    /// Runs one tick of the game: applies at most one queued direction change,
    /// then moves, grows or ends the game.
    pub fn advance(&mut self) -> TickOutcome {
        if self.is_finished() {
            debug!("Tried to advance a finished game");
            return TickOutcome::Finished;
        }

        if let Some(next) = self.direction_changes.pop_front() {
            self.direction = next;
        }

        let new_head = self.get_head().translate(self.direction);
        match self.will_hit(new_head) {
            CellKind::Empty => {
                self.remove_tail();
                self.add_head(new_head);
                TickOutcome::Moved
            }
            CellKind::Food => {
                self.add_head(new_head);
                self.score += 1;
                self.place_food();
                if self.game_won {
                    TickOutcome::Won
                } else {
                    TickOutcome::AteFood
                }
            }
            hit @ (CellKind::Outside | CellKind::Snake) => {
                info!("Snake hit {hit:?} at {new_head:?}. Game over. Score: {}", self.score);
                self.game_over = true;
                TickOutcome::Collided(hit)
            }
        }
    }

    /// Returns the contents of `position`, or [`CellKind::Outside`] when it is
    /// off the board.
    #[must_use]
    pub fn get_cell(&self, position: Position) -> CellKind {
        match position.to_index(self.rows, self.columns) {
            Some((row, column)) => self.grid[row][column],
            None => CellKind::Outside,
        }
    }

    #[must_use]
    pub fn get_grid(&self) -> &Vec<Vec<CellKind>> {
        &self.grid
    }

    #[must_use]
    pub fn get_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn get_columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn get_head(&self) -> Position {
        self.snake[0]
    }

    #[must_use]
    pub fn get_tail(&self) -> Position {
        self.snake[self.snake.len() - 1]
    }

    /// Body of the snake ordered from head to tail.
    #[must_use]
    pub fn get_snake_positions(&self) -> &VecDeque<Position> {
        &self.snake
    }

    #[must_use]
    pub fn get_snake_len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_pending_directions(&self) -> &VecDeque<Direction> {
        &self.direction_changes
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.game_won
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game_over || self.game_won
    }
}
