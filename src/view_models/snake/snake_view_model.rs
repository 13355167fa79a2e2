use iced::keyboard::{key::Named, Key};
use log::{debug, error, info, warn};

use crate::{
    app::Message,
    models::snake::{
        direction::Direction,
        snake_game::{
            SnakeError, SnakeGame, TickOutcome, DEFAULT_COLUMNS, DEFAULT_ROWS,
            MILLIS_BETWEEN_FRAMES,
        },
    },
    view_model::ViewModel,
    views::{home::HomeMessage, snake::snake_game_screen::SnakeMessage},
};

/// Board size of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeParams {
    pub rows: usize,
    pub columns: usize,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Drives a [`SnakeGame`]: keyboard input queues direction changes and timer
/// ticks advance the game. Both arrive through `update`, one at a time.
#[derive(Debug)]
pub struct SnakeViewModel {
    params: SnakeParams,
    game: SnakeGame,
}

impl SnakeViewModel {
    /// Creates a new view model with the given paramters.
    ///
    /// # Errors
    ///
    /// If the board size is invalid and a [`SnakeGame`] cannot be created,
    /// returns a [`SnakeError`].
    pub fn new(params: SnakeParams) -> Result<Self, SnakeError> {
        debug!("New SnakeViewModel params: {:#?}", params);
        let game = SnakeGame::new(params.rows, params.columns)?;
        Ok(Self { params, game })
    }

    /// Wraps an existing game, e.g. one built with a fixed seed.
    #[must_use]
    pub fn from_game(game: SnakeGame) -> Self {
        let params = SnakeParams {
            rows: game.get_rows(),
            columns: game.get_columns(),
        };
        Self { params, game }
    }

    /// Maps arrow keys and WASD to a heading.
    #[must_use]
    pub fn direction_for_key(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Direction::Up),
                Named::ArrowDown => Some(Direction::Down),
                Named::ArrowLeft => Some(Direction::Left),
                Named::ArrowRight => Some(Direction::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Direction::Up),
                "s" | "S" => Some(Direction::Down),
                "a" | "A" => Some(Direction::Left),
                "d" | "D" => Some(Direction::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    fn reset(&mut self) {
        debug!("Reset requested. Starting a new game");
        match SnakeGame::new(self.params.rows, self.params.columns) {
            Ok(game) => self.game = game,
            Err(e) => error!("Could not restart the game: {e}"),
        }
    }

    fn tick(&mut self) {
        if self.game.is_finished() {
            return;
        }
        match self.game.advance() {
            TickOutcome::AteFood => debug!("Snake ate. Score: {}", self.game.get_score()),
            TickOutcome::Won => info!("Board is full. YOU WON!"),
            TickOutcome::Collided(hit) => debug!("Snake collided with {hit:?}"),
            TickOutcome::Moved | TickOutcome::Finished => (),
        }
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame {
        &self.game
    }

    #[must_use]
    pub fn get_params(&self) -> SnakeParams {
        self.params
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        MILLIS_BETWEEN_FRAMES
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_finished()
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let snake_message = match message {
            Message::Snake(snake_message) => snake_message,
            other => {
                warn!("Non-snake message sent to SnakeViewModel: {:#?}", other);
                return None;
            }
        };
        match snake_message {
            SnakeMessage::Key(key) => {
                if self.game.is_finished() {
                    if matches!(key, Key::Named(Named::Space)) {
                        self.reset();
                    }
                    return None;
                }
                if let Some(direction) = Self::direction_for_key(&key) {
                    self.game.queue_direction(direction);
                }
                None
            }
            SnakeMessage::Timer(_) => {
                self.tick();
                None
            }
            SnakeMessage::Reset => {
                self.reset();
                None
            }
            SnakeMessage::HomeScreenTransition => {
                debug!("Transitioning to home screen");
                Some(Message::Home(HomeMessage::Default))
            }
            SnakeMessage::Default => None,
        }
    }
}
