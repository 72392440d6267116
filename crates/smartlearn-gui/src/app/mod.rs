//! Main application module for SmartLearn.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **View state is part of the ViewState enum** - Navigation replaces the
//!   variant, so transient feature state never survives leaving a screen
//! - **The `Session` is authoritative** - Handlers run the session
//!   transition first and only mirror `view` when it succeeds
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers organized by category

mod handler;

use iced::keyboard;
use iced::widget::container;
use iced::{Element, Subscription, Task, Theme};

use crate::message::Message;
use crate::state::{AppState, Settings, ViewState};
use crate::theme::scholar_theme;
use crate::view::{view_feature, view_landing, view_login, view_overview};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Loads persisted settings from disk.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let app = Self {
            state: AppState::with_settings(settings),
        };

        (app, Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen
    /// here, delegated to the handler modules.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Landing
            // =================================================================
            Message::LoginRequested => self.handle_login_requested(),

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Login(login_msg) => self.handle_login_message(login_msg),

            Message::Dashboard(dashboard_msg) => self.handle_dashboard_message(dashboard_msg),

            Message::Feature(feature_msg) => self.handle_feature_message(feature_msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            // =================================================================
            // External actions
            // =================================================================
            Message::OpenUrl(url) => {
                let _ = open::that(&url);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current view.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state.view {
            ViewState::Landing => view_landing(),
            ViewState::Login(login) => view_login(login),
            ViewState::Overview => view_overview(&self.state),
            ViewState::Feature(feature) => view_feature(feature),
        };

        container(content)
            .width(iced::Length::Fill)
            .height(iced::Length::Fill)
            .into()
    }

    /// Get the window title for the current view.
    pub fn title(&self) -> String {
        match &self.state.view {
            ViewState::Landing => "SmartLearn".to_string(),
            ViewState::Login(_) => "Sign In - SmartLearn".to_string(),
            ViewState::Overview => "Dashboard - SmartLearn".to_string(),
            ViewState::Feature(feature) => {
                format!("{} - SmartLearn", feature.id().title())
            }
        }
    }

    /// Get the theme for the configured mode.
    pub fn theme(&self) -> Theme {
        scholar_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        // Keyboard events for shortcuts (Enter submits login, Escape goes back)
        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        // System theme changes (for ThemeMode::System)
        let system_theme_sub = iced::system::theme_changes().map(Message::SystemThemeChanged);

        Subscription::batch([keyboard_sub, system_theme_sub])
    }
}

#[cfg(test)]
mod tests {
    use smartlearn_core::{FeatureId, SessionState};

    use smartlearn_mock::exam::{Difficulty, ResourceKind, ScanOutcome, StudyResource};

    use super::*;
    use crate::message::{
        DashboardMessage, ExamMessage, ExplainMessage, FeatureMessage, LoginMessage,
    };
    use crate::state::{FeatureView, UploadedFile};

    fn app() -> App {
        App {
            state: AppState::default(),
        }
    }

    /// Drive the app through the mock login flow.
    fn login(app: &mut App) {
        let _ = app.update(Message::LoginRequested);
        let _ = app.update(Message::Login(LoginMessage::EmailChanged(
            "student@example.com".into(),
        )));
        let _ = app.update(Message::Login(LoginMessage::PasswordChanged("pw".into())));
        let _ = app.update(Message::Login(LoginMessage::SubmitClicked));
        let task = match &app.state.view {
            ViewState::Login(login) => login.task.expect("submission should start a task"),
            other => panic!("expected login view, got {other:?}"),
        };
        let _ = app.update(Message::Login(LoginMessage::VerifyFinished {
            task,
            result: Ok(()),
        }));
    }

    #[test]
    fn login_flow_reaches_the_dashboard() {
        let mut app = app();
        login(&mut app);
        assert_eq!(app.state.session.state(), SessionState::Authenticated);
        assert!(matches!(app.state.view, ViewState::Overview));
    }

    #[test]
    fn failed_verification_shows_the_error_inline() {
        let mut app = app();
        let _ = app.update(Message::LoginRequested);
        let _ = app.update(Message::Login(LoginMessage::SubmitClicked));
        let task = match &app.state.view {
            ViewState::Login(login) => login.task.expect("submission should start a task"),
            other => panic!("expected login view, got {other:?}"),
        };
        let _ = app.update(Message::Login(LoginMessage::VerifyFinished {
            task,
            result: Err(smartlearn_mock::auth::VerifyError::InvalidCredentials),
        }));

        assert_eq!(app.state.session.state(), SessionState::Authenticating);
        match &app.state.view {
            ViewState::Login(login) => {
                assert!(login.error.is_some());
                assert!(!login.is_submitting());
            }
            other => panic!("expected login view, got {other:?}"),
        }
    }

    #[test]
    fn stale_verification_results_are_dropped() {
        let mut app = app();
        let _ = app.update(Message::LoginRequested);
        let _ = app.update(Message::Login(LoginMessage::SubmitClicked));
        // A result with a generation that was never handed to this view.
        let _ = app.update(Message::Login(LoginMessage::VerifyFinished {
            task: 999,
            result: Ok(()),
        }));
        assert_eq!(app.state.session.state(), SessionState::Authenticating);
        assert!(matches!(app.state.view, ViewState::Login(_)));
    }

    #[test]
    fn back_from_login_cancels_the_flow() {
        let mut app = app();
        let _ = app.update(Message::LoginRequested);
        let _ = app.update(Message::Login(LoginMessage::BackClicked));
        assert_eq!(app.state.session.state(), SessionState::Anonymous);
        assert!(matches!(app.state.view, ViewState::Landing));
    }

    #[test]
    fn feature_navigation_mirrors_the_session() {
        let mut app = app();
        login(&mut app);

        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::Handwriting,
        )));
        assert_eq!(
            app.state.session.active_feature(),
            Some(FeatureId::Handwriting)
        );
        assert_eq!(app.state.view.active_feature(), Some(FeatureId::Handwriting));

        let _ = app.update(Message::Feature(FeatureMessage::BackClicked));
        assert_eq!(app.state.session.active_feature(), None);
        assert!(matches!(app.state.view, ViewState::Overview));
    }

    #[test]
    fn feature_selection_requires_authentication() {
        let mut app = app();
        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::Progress,
        )));
        assert_eq!(app.state.session.state(), SessionState::Anonymous);
        assert!(matches!(app.state.view, ViewState::Landing));
    }

    #[test]
    fn reentered_feature_starts_fresh() {
        let mut app = app();
        login(&mut app);

        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ExplainLikeChild,
        )));
        let _ = app.update(Message::Feature(FeatureMessage::Explain(
            ExplainMessage::TopicChanged("Gravity".into()),
        )));
        let _ = app.update(Message::Feature(FeatureMessage::BackClicked));
        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ExplainLikeChild,
        )));

        match &app.state.view {
            ViewState::Feature(FeatureView::Explain(ui)) => {
                assert!(ui.topic.is_empty());
                assert!(ui.explanation.is_none());
            }
            other => panic!("expected explain view, got {other:?}"),
        }
    }

    #[test]
    fn orphaned_explanation_is_dropped_after_navigation() {
        let mut app = app();
        login(&mut app);

        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ExplainLikeChild,
        )));
        let _ = app.update(Message::Feature(FeatureMessage::Explain(
            ExplainMessage::TopicChanged("Gravity".into()),
        )));
        let _ = app.update(Message::Feature(FeatureMessage::Explain(
            ExplainMessage::ExplainClicked,
        )));
        let task = match &app.state.view {
            ViewState::Feature(FeatureView::Explain(ui)) => {
                ui.task.expect("explain should start a task")
            }
            other => panic!("expected explain view, got {other:?}"),
        };

        // Leave and re-enter before the mock result arrives.
        let _ = app.update(Message::Feature(FeatureMessage::BackClicked));
        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ExplainLikeChild,
        )));
        let _ = app.update(Message::Feature(FeatureMessage::Explain(
            ExplainMessage::ExplanationReady {
                task,
                text: "stale".into(),
            },
        )));

        match &app.state.view {
            ViewState::Feature(FeatureView::Explain(ui)) => {
                assert!(ui.explanation.is_none(), "stale result must not land");
            }
            other => panic!("expected explain view, got {other:?}"),
        }
    }

    #[test]
    fn exam_scan_outcome_lands_with_typed_resource_kinds() {
        let mut app = app();
        login(&mut app);

        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ExamScanner,
        )));
        let _ = app.update(Message::Feature(FeatureMessage::Exam(
            ExamMessage::FileChosen(Some(UploadedFile {
                name: "question.jpg".into(),
                size_bytes: 2048,
            })),
        )));
        let task = match &app.state.view {
            ViewState::Feature(FeatureView::Exam(ui)) => ui.task.expect("scan should start"),
            other => panic!("expected exam view, got {other:?}"),
        };
        let _ = app.update(Message::Feature(FeatureMessage::Exam(
            ExamMessage::ScanReady {
                task,
                outcome: ScanOutcome {
                    question: "What is the derivative of f(x)?".into(),
                    resources: vec![StudyResource {
                        kind: ResourceKind::VideoLesson,
                        title: "Derivatives",
                        meta: "12:34",
                        difficulty: Difficulty::Intermediate,
                        description: "Video walkthrough",
                    }],
                },
            },
        )));

        match &app.state.view {
            ViewState::Feature(FeatureView::Exam(ui)) => {
                let outcome = ui.outcome.as_ref().expect("scan outcome must land");
                assert_eq!(outcome.resources[0].kind, ResourceKind::VideoLesson);
                assert!(ui.task.is_none());
            }
            other => panic!("expected exam view, got {other:?}"),
        }
    }

    #[test]
    fn selecting_another_feature_replaces_the_current_one() {
        let mut app = app();
        login(&mut app);

        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::Progress,
        )));
        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::ChatPdf,
        )));
        assert_eq!(app.state.session.active_feature(), Some(FeatureId::ChatPdf));
        assert_eq!(app.state.view.active_feature(), Some(FeatureId::ChatPdf));
    }

    #[test]
    fn logout_returns_to_the_landing_page() {
        let mut app = app();
        login(&mut app);
        let _ = app.update(Message::Dashboard(DashboardMessage::FeatureClicked(
            FeatureId::Progress,
        )));
        let _ = app.update(Message::Dashboard(DashboardMessage::LogoutClicked));
        assert_eq!(app.state.session.state(), SessionState::Anonymous);
        assert!(matches!(app.state.view, ViewState::Landing));
    }
}
