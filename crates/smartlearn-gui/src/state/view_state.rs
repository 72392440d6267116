//! View state - current view and its associated UI state.
//!
//! Each view variant holds its own UI state. Navigation replaces the whole
//! `ViewState`, which automatically discards any transient state - a
//! feature re-entered after leaving always starts fresh, and completions of
//! mock tasks started by a torn-down view have nothing left to mutate.

use smartlearn_core::FeatureId;
use smartlearn_mock::exam::ScanOutcome;
use smartlearn_mock::language::Language;
use smartlearn_mock::progress::Period;

use crate::error::GuiError;

// =============================================================================
// VIEW STATE
// =============================================================================

/// Current view and its associated UI state.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Public landing screen.
    #[default]
    Landing,
    /// Login / sign-up form.
    Login(LoginUi),
    /// Dashboard overview - the feature grid.
    Overview,
    /// A single active feature screen.
    Feature(FeatureView),
}

impl ViewState {
    /// Create the login view with an empty form.
    pub fn login() -> Self {
        Self::Login(LoginUi::default())
    }

    /// The feature this view shows, if any.
    pub fn active_feature(&self) -> Option<FeatureId> {
        match self {
            Self::Feature(feature) => Some(feature.id()),
            _ => None,
        }
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Sign-in vs. sign-up presentation of the login card.
///
/// Both submit through the same mock flow; sign-up only adds a name field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn card_title(&self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back!",
            Self::SignUp => "Join SmartLearn",
        }
    }

    pub fn card_subtitle(&self) -> &'static str {
        match self {
            Self::SignIn => "Enter your credentials to access your learning dashboard",
            Self::SignUp => "Create an account to start your learning journey",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    pub fn toggle_prompt(&self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }
}

/// UI state for the login view.
#[derive(Debug, Clone, Default)]
pub struct LoginUi {
    pub mode: LoginMode,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Generation of the in-flight verification, if one is running.
    pub task: Option<u64>,
    /// Last submission error, shown inline on the card.
    pub error: Option<GuiError>,
}

impl LoginUi {
    pub fn is_submitting(&self) -> bool {
        self.task.is_some()
    }
}

// =============================================================================
// FEATURE VIEWS
// =============================================================================

/// The active feature screen and its local state.
///
/// Local state is owned exclusively by the view instance and has no
/// relationship to the session beyond being gated by it.
#[derive(Debug, Clone)]
pub enum FeatureView {
    Explain(ExplainUi),
    Language(LanguageUi),
    Handwriting(HandwritingUi),
    Exam(ExamUi),
    Chat(ChatUi),
    Progress(ProgressUi),
}

impl FeatureView {
    /// Create the initial (idle) state for a feature.
    pub fn fresh(id: FeatureId) -> Self {
        match id {
            FeatureId::ExplainLikeChild => Self::Explain(ExplainUi::default()),
            FeatureId::LocalLanguage => Self::Language(LanguageUi::default()),
            FeatureId::Handwriting => Self::Handwriting(HandwritingUi::default()),
            FeatureId::ExamScanner => Self::Exam(ExamUi::default()),
            FeatureId::ChatPdf => Self::Chat(ChatUi::default()),
            FeatureId::Progress => Self::Progress(ProgressUi::default()),
        }
    }

    /// Which feature this view shows.
    pub fn id(&self) -> FeatureId {
        match self {
            Self::Explain(_) => FeatureId::ExplainLikeChild,
            Self::Language(_) => FeatureId::LocalLanguage,
            Self::Handwriting(_) => FeatureId::Handwriting,
            Self::Exam(_) => FeatureId::ExamScanner,
            Self::Chat(_) => FeatureId::ChatPdf,
            Self::Progress(_) => FeatureId::Progress,
        }
    }
}

/// Metadata for a mock-uploaded file. Only the name and size are kept;
/// the file is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    /// Size formatted in megabytes, matching the original demo.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// "Explain Like I'm Five" local state.
#[derive(Debug, Clone, Default)]
pub struct ExplainUi {
    pub topic: String,
    pub explanation: Option<String>,
    /// Generation of the in-flight explanation, if one is running.
    pub task: Option<u64>,
}

/// Local-language screen state. Selection is synchronous; no task.
#[derive(Debug, Clone, Default)]
pub struct LanguageUi {
    pub selected: Option<Language>,
}

/// Handwriting-recognition local state.
#[derive(Debug, Clone, Default)]
pub struct HandwritingUi {
    pub file: Option<UploadedFile>,
    pub transcript: Option<String>,
    pub task: Option<u64>,
    /// One-line status after a save attempt.
    pub save_status: Option<String>,
}

/// Exam-scanner local state.
#[derive(Debug, Clone, Default)]
pub struct ExamUi {
    pub file: Option<UploadedFile>,
    pub outcome: Option<ScanOutcome>,
    pub task: Option<u64>,
}

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Student,
    Assistant,
}

/// One message in the chat transcript.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub author: ChatAuthor,
    pub content: String,
}

/// Chat-with-PDF local state.
#[derive(Debug, Clone, Default)]
pub struct ChatUi {
    pub file: Option<UploadedFile>,
    pub input: String,
    pub entries: Vec<ChatEntry>,
    pub task: Option<u64>,
}

/// Progress-dashboard local state.
#[derive(Debug, Clone, Default)]
pub struct ProgressUi {
    pub period: Period,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_view_matches_requested_feature() {
        for id in FeatureId::ALL {
            assert_eq!(FeatureView::fresh(id).id(), id);
        }
    }

    #[test]
    fn size_label_matches_original_format() {
        let file = UploadedFile {
            name: "notes.jpg".into(),
            size_bytes: 2 * 1024 * 1024 + 512 * 1024,
        };
        assert_eq!(file.size_label(), "2.50 MB");
    }
}
