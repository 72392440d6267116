//! GUI-specific error types.
//!
//! The application has exactly one user-facing error path: credential
//! submission with empty fields. Everything else here is plumbing for
//! local file operations (saving a transcript) and internal guards.

use thiserror::Error;

/// GUI-facing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Identifier or secret was empty at login submission.
    #[error("Please fill in all required fields.")]
    InvalidCredentials,

    /// A local file operation failed (e.g. saving a transcript).
    #[error("File operation failed: {reason}")]
    FileOperation {
        /// Description of what went wrong.
        reason: String,
    },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl GuiError {
    /// Create a file operation error from any error source.
    pub fn file_operation(err: impl std::fmt::Display) -> Self {
        Self::FileOperation {
            reason: err.to_string(),
        }
    }
}

impl From<smartlearn_core::SessionError> for GuiError {
    fn from(err: smartlearn_core::SessionError) -> Self {
        match err {
            smartlearn_core::SessionError::InvalidCredentials => Self::InvalidCredentials,
            other @ smartlearn_core::SessionError::InvalidTransition { .. } => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<smartlearn_mock::auth::VerifyError> for GuiError {
    fn from(err: smartlearn_mock::auth::VerifyError) -> Self {
        match err {
            smartlearn_mock::auth::VerifyError::InvalidCredentials => Self::InvalidCredentials,
        }
    }
}
