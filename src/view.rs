use iced::{Element, Subscription};

use crate::app::Message;

/// A screen of the application in the MVVM architecture.
pub trait View {
    /// Handles a message. A returned message asks the application to switch screens.
    fn update(&mut self, message: Message) -> Option<Message>;

    fn view(&self) -> Element<'_, Message>;

    fn subscription(&self) -> Subscription<Message>;
}
