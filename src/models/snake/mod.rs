//! Model layer of the snake game: value types and the rules engine.
pub mod cell_kind;
pub mod direction;
pub mod position;
pub mod snake_game;
