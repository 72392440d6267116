//! Feature screen dispatch and shared back navigation.
//!
//! Every feature exposes the same "Back to Dashboard" action; the
//! per-feature messages are routed to their own handler modules. A message
//! that does not match the active feature screen belongs to a torn-down
//! view and is dropped.

use iced::Task;

use crate::app::App;
use crate::message::{FeatureMessage, Message};
use crate::state::ViewState;

impl App {
    /// Handle active feature screen messages.
    pub fn handle_feature_message(&mut self, msg: FeatureMessage) -> Task<Message> {
        match msg {
            FeatureMessage::BackClicked => {
                match self.state.session.exit_feature() {
                    Ok(()) => {
                        self.state.view = ViewState::Overview;
                    }
                    Err(err) => {
                        tracing::warn!("exit_feature rejected: {err}");
                    }
                }
                Task::none()
            }

            FeatureMessage::Explain(explain_msg) => self.handle_explain_message(explain_msg),
            FeatureMessage::Language(language_msg) => self.handle_language_message(language_msg),
            FeatureMessage::Handwriting(handwriting_msg) => {
                self.handle_handwriting_message(handwriting_msg)
            }
            FeatureMessage::Exam(exam_msg) => self.handle_exam_message(exam_msg),
            FeatureMessage::Chat(chat_msg) => self.handle_chat_message(chat_msg),
            FeatureMessage::Progress(progress_msg) => self.handle_progress_message(progress_msg),
        }
    }
}
