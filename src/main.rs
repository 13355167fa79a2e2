use env_logger::Env;
use gridsnake::{
    app::State,
    models::snake::snake_game::{DEFAULT_COLUMNS, DEFAULT_ROWS},
    views::snake::snake_game_screen::CELL_SIZE,
};
use log::debug;

// Board plus room for the buttons and score line.
#[allow(clippy::cast_precision_loss)]
fn window_size() -> iced::Size {
    let cell = f32::from(CELL_SIZE);
    iced::Size::new(
        DEFAULT_COLUMNS as f32 * cell + 100.0,
        DEFAULT_ROWS as f32 * cell + 200.0,
    )
}

fn main() -> iced::Result {
    env_logger::init_from_env(Env::default().default_filter_or("gridsnake=debug"));
    debug!("Debug on");
    iced::application("Snake", State::update, State::view)
        .window_size(window_size())
        .subscription(State::subscription)
        .run()
}
