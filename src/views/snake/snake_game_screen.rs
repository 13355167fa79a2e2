use std::time::Duration;

use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{button, column, container, row, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::snake::{cell_kind::CellKind, snake_game::SnakeError},
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::{SnakeParams, SnakeViewModel},
};

/// Side of one board cell in pixels.
pub const CELL_SIZE: u16 = 20;

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    /// Asks the application to open a fresh game screen.
    Default,
    Key(Key),
    Timer(Instant),
    Reset,
    HomeScreenTransition,
}

impl SnakeMessage {
    #[must_use]
    pub fn new() -> Self {
        SnakeMessage::Default
    }
}

impl Default for SnakeMessage {
    fn default() -> Self {
        SnakeMessage::new()
    }
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }

    /// Builds a screen with a new game.
    ///
    /// # Errors
    ///
    /// Fails if the game cannot be created for `params`.
    pub fn with_params(params: SnakeParams) -> Result<Self, SnakeError> {
        Ok(Self::new(SnakeViewModel::new(params)?))
    }

    fn cell_color(kind: CellKind, is_head: bool, dead: bool) -> Color {
        match (kind, is_head, dead) {
            (CellKind::Snake, true, false) => Color::from_rgb(0.0, 0.6, 0.0),
            (CellKind::Snake, false, false) => Color::from_rgba(0.0, 1.0, 0.0, 0.8),
            (CellKind::Snake, true, true) => Color::from_rgb(0.3, 0.3, 0.3),
            (CellKind::Snake, false, true) => Color::from_rgb(0.6, 0.6, 0.6),
            (CellKind::Food, _, _) => Color::from_rgb(1.0, 0.0, 0.0),
            (CellKind::Empty | CellKind::Outside, _, _) => Color::WHITE,
        }
    }

    fn status_line(&self) -> String {
        let game = self.view_model.get_game();
        if game.is_game_won() {
            format!("YOU WON! SCORE: {}", game.get_score())
        } else if game.is_game_over() {
            format!(
                "GAME OVER. SCORE: {}. PRESS SPACE TO TRY AGAIN",
                game.get_score()
            )
        } else {
            format!("SCORE: {}", game.get_score())
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let game = self.view_model.get_game();
        let head = game.get_head().to_index(game.get_rows(), game.get_columns());
        let dead = game.is_game_over();

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(CELL_SIZE)
                .height(CELL_SIZE)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        let mut grid_view = Column::new();
        for (i, grid_row) in game.get_grid().iter().enumerate() {
            let mut row = Row::new();
            for (j, entry) in grid_row.iter().enumerate() {
                let is_head = head == Some((i, j));
                row = row.push(make_container(Self::cell_color(*entry, is_head, dead)));
            }
            grid_view = grid_view.push(row);
        }

        let home_button = button(text("Back to Home"))
            .on_press(Message::Snake(SnakeMessage::HomeScreenTransition))
            .width(160)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeMessage::Reset))
            .width(80)
            .height(40);

        container(
            column![
                row![home_button, restart_button].spacing(10),
                text(self.status_line()),
                grid_view,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard = keyboard::on_key_press(|key, _| Some(Message::Snake(SnakeMessage::Key(key))));
        if self.view_model.game_over() {
            return keyboard;
        }
        let timer = time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(SnakeMessage::Timer)
        .map(Message::Snake);
        Subscription::batch(vec![timer, keyboard])
    }
}
