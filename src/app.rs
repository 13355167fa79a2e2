use iced::{Element, Subscription};
use log::{debug, error};

use crate::{
    models::snake::snake_game::SnakeError,
    view::View,
    view_models::snake::snake_view_model::SnakeParams,
    views::{
        home::{Home, HomeMessage},
        snake::snake_game_screen::{SnakeGameScreen, SnakeMessage},
    },
};

pub struct State {
    screen: Screen,
}

#[derive(Debug)]
enum Screen {
    Home(Home),
    Snake(SnakeGameScreen),
}

impl Screen {
    pub fn new_home() -> Self {
        Screen::Home(Home::new())
    }

    pub fn new_snake() -> Result<Self, SnakeError> {
        Ok(Screen::Snake(SnakeGameScreen::with_params(
            SnakeParams::default(),
        )?))
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Home(HomeMessage),
    Snake(SnakeMessage),
}

impl Message {
    #[must_use]
    pub fn new_home() -> Self {
        Message::Home(HomeMessage::new())
    }

    #[must_use]
    pub fn new_snake() -> Self {
        Message::Snake(SnakeMessage::new())
    }
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Home(screen) => screen.update(message),
            Screen::Snake(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            Screen::Home(screen) => screen.view(),
            Screen::Snake(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Home(screen) => screen.subscription(),
            Screen::Snake(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::new_home(),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            match next {
                Message::Home(_) => {
                    debug!("Transitioning to home screen");
                    state.screen = Screen::new_home();
                }
                Message::Snake(_) => match Screen::new_snake() {
                    Ok(screen) => {
                        debug!("Transitioning to snake game screen");
                        state.screen = screen;
                    }
                    Err(e) => error!("Could not start a snake game: {e}"),
                },
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }

    #[must_use]
    pub fn on_home_screen(&self) -> bool {
        matches!(self.screen, Screen::Home(_))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_transitions() {
        let mut state = State::new();
        assert!(state.on_home_screen());

        State::update(&mut state, Message::Home(HomeMessage::Start));
        assert!(!state.on_home_screen());

        State::update(&mut state, Message::Snake(SnakeMessage::Reset));
        assert!(!state.on_home_screen());

        State::update(&mut state, Message::Snake(SnakeMessage::HomeScreenTransition));
        assert!(state.on_home_screen());

        assert!(matches!(Message::new_home(), Message::Home(HomeMessage::Default)));
        assert!(matches!(Message::new_snake(), Message::Snake(SnakeMessage::Default)));
    }
}
