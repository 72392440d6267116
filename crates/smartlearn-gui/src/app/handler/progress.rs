//! Progress-dashboard message handlers.
//!
//! Period selection is synchronous; the canned data is rescaled at render
//! time.

use iced::Task;

use crate::app::App;
use crate::message::{Message, ProgressMessage};
use crate::state::{FeatureView, ViewState};

impl App {
    /// Handle progress screen messages.
    pub fn handle_progress_message(&mut self, msg: ProgressMessage) -> Task<Message> {
        match msg {
            ProgressMessage::PeriodSelected(period) => {
                if let ViewState::Feature(FeatureView::Progress(ui)) = &mut self.state.view {
                    ui.period = period;
                }
                Task::none()
            }
        }
    }
}
