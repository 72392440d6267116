//! Application state.
//!
//! `AppState` is the root of all state. Navigation truth lives in
//! `smartlearn_core::Session`; `ViewState` mirrors it and carries the
//! per-view UI state that is discarded on navigation.

mod app_state;
mod settings;
mod view_state;

pub use app_state::AppState;
pub use settings::{DisplaySettings, Settings};
pub use view_state::{
    ChatAuthor, ChatEntry, ChatUi, ExamUi, ExplainUi, FeatureView, HandwritingUi, LanguageUi,
    LoginMode, LoginUi, ProgressUi, UploadedFile, ViewState,
};
