//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and system events flow through these types; the
//! `update` function processes them to modify application state.

pub mod dashboard;
pub mod feature;
pub mod login;

use iced::keyboard;

pub use dashboard::DashboardMessage;
pub use feature::{
    ChatMessage, ExamMessage, ExplainMessage, FeatureMessage, HandwritingMessage, LanguageMessage,
    ProgressMessage,
};
pub use login::LoginMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Landing
    // =========================================================================
    /// User asked to open the login screen (header button, hero, or CTA).
    LoginRequested,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Login view messages.
    Login(LoginMessage),

    /// Dashboard overview messages.
    Dashboard(DashboardMessage),

    /// Active feature screen messages.
    Feature(FeatureMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// The OS light/dark appearance changed.
    SystemThemeChanged(iced::theme::Mode),

    /// Open a URL in the default browser (external navigation hop).
    OpenUrl(String),

    /// No operation - placeholder for ignored events.
    Noop,
}
