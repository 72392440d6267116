//! Login view messages.

use smartlearn_mock::auth::VerifyError;

/// Messages for the login / sign-up card.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Full name input changed (sign-up mode only).
    NameChanged(String),
    /// Email input changed.
    EmailChanged(String),
    /// Password input changed.
    PasswordChanged(String),
    /// Switch between sign-in and sign-up presentation.
    ModeToggled,
    /// Submit the form.
    SubmitClicked,
    /// "Back to Home" - abandon the login flow.
    BackClicked,
    /// The mock verifier finished.
    VerifyFinished {
        /// Generation of the request this result belongs to.
        task: u64,
        result: Result<(), VerifyError>,
    },
}
