//! Local-language screen message handlers.
//!
//! Selection is synchronous; this is the only feature without a mock delay.

use iced::Task;

use crate::app::App;
use crate::message::{LanguageMessage, Message};
use crate::state::{FeatureView, ViewState};

impl App {
    /// Handle local-language screen messages.
    pub fn handle_language_message(&mut self, msg: LanguageMessage) -> Task<Message> {
        match msg {
            LanguageMessage::Selected(language) => {
                if let ViewState::Feature(FeatureView::Language(ui)) = &mut self.state.view {
                    tracing::info!(language = %language, "language selected");
                    ui.selected = Some(language);
                }
                Task::none()
            }
        }
    }
}
