//! Chat-with-PDF message handlers.
//!
//! Uploading a document is acknowledged immediately with a canned assistant
//! message; replies arrive after a short mock delay and are routed by
//! keyword. The external chat tool opens in the browser.

use iced::Task;

use smartlearn_mock::chat::{CHAT_TOOL_URL, KEY_CONCEPTS_PROMPT, acknowledge_upload, reply};

use crate::app::App;
use crate::message::{ChatMessage, FeatureMessage, Message};
use crate::state::{ChatAuthor, ChatEntry, ChatUi, FeatureView, UploadedFile, ViewState};

impl App {
    /// Handle chat screen messages.
    pub fn handle_chat_message(&mut self, msg: ChatMessage) -> Task<Message> {
        match msg {
            ChatMessage::UploadClicked => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select PDF or Video")
                        .add_filter("Documents and Videos", &["pdf", "mp4", "mov", "avi"])
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
                |file| Message::Feature(FeatureMessage::Chat(ChatMessage::FileChosen(file))),
            ),

            ChatMessage::FileChosen(Some(file)) => {
                if let Some(ui) = self.chat_ui() {
                    tracing::info!(file = %file.name, "chat document uploaded");
                    let ack = acknowledge_upload(&file.name);
                    ui.file = Some(file);
                    ui.entries.clear();
                    ui.entries.push(ChatEntry {
                        author: ChatAuthor::Assistant,
                        content: ack,
                    });
                }
                Task::none()
            }

            ChatMessage::FileChosen(None) => Task::none(),

            ChatMessage::InputChanged(value) => {
                if let Some(ui) = self.chat_ui() {
                    ui.input = value;
                }
                Task::none()
            }

            ChatMessage::SendClicked => self.handle_chat_send(),

            ChatMessage::QuickPromptClicked => {
                if let Some(ui) = self.chat_ui() {
                    ui.input = KEY_CONCEPTS_PROMPT.to_owned();
                }
                Task::none()
            }

            ChatMessage::OpenChatToolClicked => {
                Task::done(Message::OpenUrl(CHAT_TOOL_URL.to_owned()))
            }

            ChatMessage::ReplyReady { task, text } => {
                let Some(ui) = self.chat_ui() else {
                    tracing::debug!(task, "dropping reply for a closed chat view");
                    return Task::none();
                };
                if ui.task != Some(task) {
                    tracing::debug!(task, "dropping superseded reply");
                    return Task::none();
                }
                ui.task = None;
                ui.entries.push(ChatEntry {
                    author: ChatAuthor::Assistant,
                    content: text,
                });
                Task::none()
            }
        }
    }

    /// Append the student's message and kick off the mock reply.
    fn handle_chat_send(&mut self) -> Task<Message> {
        let task = self.state.next_task();
        let Some(ui) = self.chat_ui() else {
            return Task::none();
        };
        // Replies require an uploaded document and a non-empty prompt.
        if ui.file.is_none() || ui.task.is_some() || ui.input.trim().is_empty() {
            return Task::none();
        }

        let prompt = std::mem::take(&mut ui.input);
        ui.entries.push(ChatEntry {
            author: ChatAuthor::Student,
            content: prompt.clone(),
        });
        ui.task = Some(task);
        tracing::info!(task, "requesting chat reply");

        Task::perform(async move { reply(&prompt).await }, move |text| {
            Message::Feature(FeatureMessage::Chat(ChatMessage::ReplyReady { task, text }))
        })
    }

    /// The chat screen's UI state, if it is the active view.
    fn chat_ui(&mut self) -> Option<&mut ChatUi> {
        match &mut self.state.view {
            ViewState::Feature(FeatureView::Chat(ui)) => Some(ui),
            _ => None,
        }
    }
}
