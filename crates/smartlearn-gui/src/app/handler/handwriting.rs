//! Handwriting-recognition message handlers.
//!
//! Upload is mock-only: the chosen file is never opened, only its name and
//! size are recorded, and transcription starts immediately with a canned
//! result. Copy and download act on the transcript text.

use std::path::PathBuf;

use iced::Task;

use smartlearn_mock::handwriting::transcribe;

use crate::app::App;
use crate::error::GuiError;
use crate::message::{FeatureMessage, HandwritingMessage, Message};
use crate::state::{FeatureView, HandwritingUi, UploadedFile, ViewState};

impl App {
    /// Handle handwriting screen messages.
    pub fn handle_handwriting_message(&mut self, msg: HandwritingMessage) -> Task<Message> {
        match msg {
            HandwritingMessage::UploadClicked => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select Handwriting Image")
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
                |file| {
                    Message::Feature(FeatureMessage::Handwriting(HandwritingMessage::FileChosen(
                        file,
                    )))
                },
            ),

            HandwritingMessage::FileChosen(Some(file)) => self.handle_handwriting_file(file),

            HandwritingMessage::FileChosen(None) => Task::none(),

            HandwritingMessage::TranscriptReady { task, text } => {
                let Some(ui) = self.handwriting_ui() else {
                    tracing::debug!(task, "dropping transcript for a closed handwriting view");
                    return Task::none();
                };
                if ui.task != Some(task) {
                    tracing::debug!(task, "dropping superseded transcript");
                    return Task::none();
                }
                ui.task = None;
                ui.transcript = Some(text);
                Task::none()
            }

            HandwritingMessage::CopyClicked => {
                if let Some(text) = self.handwriting_ui().and_then(|ui| ui.transcript.clone()) {
                    iced::clipboard::write(text)
                } else {
                    Task::none()
                }
            }

            HandwritingMessage::DownloadClicked => {
                if self
                    .handwriting_ui()
                    .is_none_or(|ui| ui.transcript.is_none())
                {
                    return Task::none();
                }
                Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Save Transcript")
                            .set_file_name("transcript.txt")
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    |path| {
                        Message::Feature(FeatureMessage::Handwriting(
                            HandwritingMessage::SavePathChosen(path),
                        ))
                    },
                )
            }

            HandwritingMessage::SavePathChosen(Some(path)) => {
                self.handle_transcript_save(path);
                Task::none()
            }

            HandwritingMessage::SavePathChosen(None) => Task::none(),
        }
    }

    /// Record the uploaded file and kick off mock transcription.
    fn handle_handwriting_file(&mut self, file: UploadedFile) -> Task<Message> {
        let task = self.state.next_task();
        let Some(ui) = self.handwriting_ui() else {
            return Task::none();
        };

        tracing::info!(task, file = %file.name, "transcribing handwriting");
        let name = file.name.clone();
        ui.file = Some(file);
        ui.transcript = None;
        ui.save_status = None;
        ui.task = Some(task);

        Task::perform(async move { transcribe(&name).await }, move |text| {
            Message::Feature(FeatureMessage::Handwriting(
                HandwritingMessage::TranscriptReady { task, text },
            ))
        })
    }

    /// Write the transcript to the chosen path and record the outcome.
    fn handle_transcript_save(&mut self, path: PathBuf) {
        let Some(ui) = self.handwriting_ui() else {
            return;
        };
        let Some(transcript) = ui.transcript.clone() else {
            return;
        };

        match std::fs::write(&path, transcript) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "transcript saved");
                ui.save_status = Some(format!("Saved to {}", path.display()));
            }
            Err(err) => {
                tracing::error!("failed to save transcript: {err}");
                ui.save_status = Some(GuiError::file_operation(err).to_string());
            }
        }
    }

    /// The handwriting screen's UI state, if it is the active view.
    fn handwriting_ui(&mut self) -> Option<&mut HandwritingUi> {
        match &mut self.state.view {
            ViewState::Feature(FeatureView::Handwriting(ui)) => Some(ui),
            _ => None,
        }
    }
}
