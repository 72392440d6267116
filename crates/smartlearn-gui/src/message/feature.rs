//! Feature screen messages.
//!
//! Every async completion carries the generation number of the request it
//! belongs to; the handlers drop completions whose view or generation is
//! no longer current.

use std::path::PathBuf;

use smartlearn_mock::exam::ScanOutcome;
use smartlearn_mock::language::Language;
use smartlearn_mock::progress::Period;

use crate::state::UploadedFile;

/// Messages for the active feature screen.
#[derive(Debug, Clone)]
pub enum FeatureMessage {
    /// "Back to Dashboard" - exposed identically by every feature.
    BackClicked,
    Explain(ExplainMessage),
    Language(LanguageMessage),
    Handwriting(HandwritingMessage),
    Exam(ExamMessage),
    Chat(ChatMessage),
    Progress(ProgressMessage),
}

/// "Explain Like I'm Five" messages.
#[derive(Debug, Clone)]
pub enum ExplainMessage {
    TopicChanged(String),
    /// A starter-topic card was clicked.
    SuggestedTopicClicked(&'static str),
    ExplainClicked,
    ExplanationReady { task: u64, text: String },
}

/// Local-language messages.
#[derive(Debug, Clone)]
pub enum LanguageMessage {
    Selected(Language),
}

/// Handwriting-recognition messages.
#[derive(Debug, Clone)]
pub enum HandwritingMessage {
    UploadClicked,
    /// File dialog closed; `None` means cancelled.
    FileChosen(Option<UploadedFile>),
    TranscriptReady { task: u64, text: String },
    CopyClicked,
    DownloadClicked,
    /// Save dialog closed; `None` means cancelled.
    SavePathChosen(Option<PathBuf>),
}

/// Exam-scanner messages.
#[derive(Debug, Clone)]
pub enum ExamMessage {
    UploadClicked,
    FileChosen(Option<UploadedFile>),
    ScanReady { task: u64, outcome: ScanOutcome },
}

/// Chat-with-PDF messages.
#[derive(Debug, Clone)]
pub enum ChatMessage {
    UploadClicked,
    FileChosen(Option<UploadedFile>),
    InputChanged(String),
    SendClicked,
    /// The canned "key concepts" quick prompt.
    QuickPromptClicked,
    /// Open the external chat tool in the browser.
    OpenChatToolClicked,
    ReplyReady { task: u64, text: String },
}

/// Progress-dashboard messages.
#[derive(Debug, Clone)]
pub enum ProgressMessage {
    PeriodSelected(Period),
}
