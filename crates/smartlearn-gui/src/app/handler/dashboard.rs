//! Dashboard overview message handlers.

use iced::Task;

use crate::app::App;
use crate::message::{DashboardMessage, Message};
use crate::state::{FeatureView, ViewState};

impl App {
    /// Handle dashboard overview messages.
    pub fn handle_dashboard_message(&mut self, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::FeatureClicked(feature) => {
                match self.state.session.select_feature(feature) {
                    Ok(()) => {
                        tracing::info!(feature = %feature, "opening feature");
                        self.state.view = ViewState::Feature(FeatureView::fresh(feature));
                    }
                    Err(err) => {
                        tracing::warn!("select_feature rejected: {err}");
                    }
                }
                Task::none()
            }

            DashboardMessage::LogoutClicked => {
                match self.state.session.logout() {
                    Ok(()) => {
                        tracing::info!("logged out");
                        self.state.view = ViewState::Landing;
                    }
                    Err(err) => {
                        tracing::warn!("logout rejected: {err}");
                    }
                }
                Task::none()
            }

            DashboardMessage::ThemeCycled => {
                let mode = self.state.settings.display.theme_mode.cycled();
                self.state.settings.display.theme_mode = mode;
                if let Err(err) = self.state.settings.save() {
                    tracing::warn!("failed to save settings: {err}");
                }
                Task::none()
            }
        }
    }
}
