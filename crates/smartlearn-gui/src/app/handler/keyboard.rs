//! Keyboard shortcut message handlers.
//!
//! Handles:
//! - Enter (Submit the login form)
//! - Escape (Back: login -> landing, feature -> overview)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::{FeatureMessage, LoginMessage, Message};
use crate::state::ViewState;

impl App {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            // Enter: submit the login form
            keyboard::Key::Named(Named::Enter) => match &self.state.view {
                ViewState::Login(login) if !login.is_submitting() => {
                    Task::done(Message::Login(LoginMessage::SubmitClicked))
                }
                _ => Task::none(),
            },

            // Escape: go back one level
            keyboard::Key::Named(Named::Escape) => match &self.state.view {
                ViewState::Login(_) => Task::done(Message::Login(LoginMessage::BackClicked)),
                ViewState::Feature(_) => {
                    Task::done(Message::Feature(FeatureMessage::BackClicked))
                }
                _ => Task::none(),
            },

            _ => Task::none(),
        }
    }
}
