//! "Explain Like I'm Five" message handlers.

use iced::Task;

use smartlearn_mock::explain::explain_topic;

use crate::app::App;
use crate::message::{ExplainMessage, FeatureMessage, Message};
use crate::state::{ExplainUi, FeatureView, ViewState};

impl App {
    /// Handle explain screen messages.
    pub fn handle_explain_message(&mut self, msg: ExplainMessage) -> Task<Message> {
        match msg {
            ExplainMessage::ExplainClicked => self.handle_explain_clicked(),
            ExplainMessage::ExplanationReady { task, text } => {
                let Some(ui) = self.explain_ui() else {
                    tracing::debug!(task, "dropping explanation for a closed explain view");
                    return Task::none();
                };
                if ui.task != Some(task) {
                    tracing::debug!(task, "dropping superseded explanation");
                    return Task::none();
                }
                ui.task = None;
                ui.explanation = Some(text);
                Task::none()
            }
            ExplainMessage::TopicChanged(value) => {
                if let Some(ui) = self.explain_ui() {
                    ui.topic = value;
                }
                Task::none()
            }
            ExplainMessage::SuggestedTopicClicked(topic) => {
                if let Some(ui) = self.explain_ui() {
                    ui.topic = topic.to_owned();
                }
                Task::none()
            }
        }
    }

    /// Kick off the mock explanation.
    fn handle_explain_clicked(&mut self) -> Task<Message> {
        let task = self.state.next_task();
        let Some(ui) = self.explain_ui() else {
            return Task::none();
        };
        if ui.task.is_some() || ui.topic.trim().is_empty() {
            return Task::none();
        }

        ui.task = Some(task);
        ui.explanation = None;

        let topic = ui.topic.clone();
        tracing::info!(task, topic, "generating explanation");

        Task::perform(async move { explain_topic(&topic).await }, move |text| {
            Message::Feature(FeatureMessage::Explain(ExplainMessage::ExplanationReady {
                task,
                text,
            }))
        })
    }

    /// The explain screen's UI state, if it is the active view.
    fn explain_ui(&mut self) -> Option<&mut ExplainUi> {
        match &mut self.state.view {
            ViewState::Feature(FeatureView::Explain(ui)) => Some(ui),
            _ => None,
        }
    }
}
