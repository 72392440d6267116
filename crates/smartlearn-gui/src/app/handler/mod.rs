//! Message handlers organized by category.
//!
//! Each handler module adds `impl App` methods to process specific message
//! types:
//! - `login` - Login flow (form edits, submission, mock verification)
//! - `dashboard` - Dashboard overview (feature selection, logout, theme)
//! - `feature` - Feature screen dispatch and shared back navigation
//! - `explain`, `language`, `handwriting`, `exam`, `chat`, `progress` -
//!   Per-feature screen messages
//! - `keyboard` - Keyboard shortcut messages

mod chat;
mod dashboard;
mod exam;
mod explain;
mod feature;
mod handwriting;
mod keyboard;
mod language;
mod login;
mod progress;
