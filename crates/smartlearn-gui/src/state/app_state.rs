//! Application-level state.

use smartlearn_core::Session;

use super::settings::Settings;
use super::view_state::ViewState;

/// Top-level application state.
///
/// `session` is the sole authority for navigation transitions; handlers
/// call it first and only mirror `view` on success. `task_seq` hands out
/// generation numbers for mock background tasks so that completions
/// arriving after the originating view was torn down can be recognized and
/// dropped.
#[derive(Debug, Default)]
pub struct AppState {
    /// Session/navigation state machine.
    pub session: Session,
    /// Current view and its UI state.
    pub view: ViewState,
    /// Persisted preferences.
    pub settings: Settings,
    /// Whether the OS reports a dark appearance (for ThemeMode::System).
    pub system_is_dark: bool,
    /// Next background-task generation number.
    task_seq: u64,
}

impl AppState {
    /// Create app state with loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Hand out a fresh task generation number.
    pub fn next_task(&mut self) -> u64 {
        self.task_seq += 1;
        self.task_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_generations_are_unique() {
        let mut state = AppState::default();
        let a = state.next_task();
        let b = state.next_task();
        assert_ne!(a, b);
    }
}
