//! Exam-scanner message handlers.
//!
//! Upload is mock-only; scanning starts immediately after a file is chosen
//! and resolves to a canned question with study resources.

use iced::Task;

use smartlearn_mock::exam::{ScanOutcome, scan_question};

use crate::app::App;
use crate::message::{ExamMessage, FeatureMessage, Message};
use crate::state::{ExamUi, FeatureView, UploadedFile, ViewState};

impl App {
    /// Handle exam-scanner screen messages.
    pub fn handle_exam_message(&mut self, msg: ExamMessage) -> Task<Message> {
        match msg {
            ExamMessage::UploadClicked => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select Exam Question")
                        .add_filter("Images", &["png", "jpg", "jpeg"])
                        .pick_file()
                        .await
                        .map(|handle| {
                            let size_bytes = std::fs::metadata(handle.path())
                                .map(|meta| meta.len())
                                .unwrap_or(0);
                            UploadedFile {
                                name: handle.file_name(),
                                size_bytes,
                            }
                        })
                },
                |file| Message::Feature(FeatureMessage::Exam(ExamMessage::FileChosen(file))),
            ),

            ExamMessage::FileChosen(Some(file)) => self.handle_exam_file(file),

            ExamMessage::FileChosen(None) => Task::none(),

            ExamMessage::ScanReady { task, outcome } => {
                let Some(ui) = self.exam_ui() else {
                    tracing::debug!(task, "dropping scan result for a closed exam view");
                    return Task::none();
                };
                if ui.task != Some(task) {
                    tracing::debug!(task, "dropping superseded scan result");
                    return Task::none();
                }
                ui.task = None;
                ui.outcome = Some(outcome);
                Task::none()
            }
        }
    }

    /// Record the uploaded file and kick off the mock scan.
    fn handle_exam_file(&mut self, file: UploadedFile) -> Task<Message> {
        let task = self.state.next_task();
        let Some(ui) = self.exam_ui() else {
            return Task::none();
        };

        tracing::info!(task, file = %file.name, "scanning exam question");
        let name = file.name.clone();
        ui.file = Some(file);
        ui.outcome = None;
        ui.task = Some(task);

        Task::perform(
            async move { scan_question(&name).await },
            move |outcome: ScanOutcome| {
                Message::Feature(FeatureMessage::Exam(ExamMessage::ScanReady { task, outcome }))
            },
        )
    }

    /// The exam screen's UI state, if it is the active view.
    fn exam_ui(&mut self) -> Option<&mut ExamUi> {
        match &mut self.state.view {
            ViewState::Feature(FeatureView::Exam(ui)) => Some(ui),
            _ => None,
        }
    }
}
