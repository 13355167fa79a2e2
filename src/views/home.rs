use iced::{
    keyboard,
    widget::{button, column, container, text},
    Alignment, Element, Length, Subscription,
};
use log::debug;

use crate::{app::Message, view::View};

use super::snake::snake_game_screen::SnakeMessage;

#[derive(Clone, Debug)]
pub enum HomeMessage {
    Default,
    Start,
}

impl HomeMessage {
    #[must_use]
    pub fn new() -> Self {
        HomeMessage::Default
    }
}

impl Default for HomeMessage {
    fn default() -> Self {
        HomeMessage::new()
    }
}

/// Start screen. Any key or the start button begins a game.
#[derive(Debug)]
pub struct Home {}

impl Home {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl View for Home {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Home(message) = message {
            match message {
                HomeMessage::Start => Some(Message::Snake(SnakeMessage::Default)),
                HomeMessage::Default => None,
            }
        } else {
            debug!("Received message for Home but was: {:#?}", message);
            None
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let start = button(
            text("Start")
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
        )
        .on_press(Message::Home(HomeMessage::Start))
        .width(100)
        .height(50);

        let content = column![
            text("Snake"),
            text("Arrow keys or WASD to steer. Press any key to start"),
            start,
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|_, _| Some(Message::Home(HomeMessage::Start)))
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requests_game() {
        let mut home = Home::new();
        let next = home.update(Message::Home(HomeMessage::Start));
        assert!(matches!(next, Some(Message::Snake(SnakeMessage::Default))));
        assert!(home.update(Message::Home(HomeMessage::Default)).is_none());
        assert!(home
            .update(Message::Snake(SnakeMessage::HomeScreenTransition))
            .is_none());
    }
}
