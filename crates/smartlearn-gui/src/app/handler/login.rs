//! Login flow message handlers.
//!
//! The session is authoritative: `LoginRequested` runs `request_login`
//! before showing the form, submission runs the mock verifier and only
//! promotes the session when its result is both successful and current.
//! Verification results carry the generation number of the request they
//! belong to; results for a dismissed form or a superseded submission are
//! dropped.

use iced::Task;

use smartlearn_mock::auth::{CredentialVerifier, MockVerifier, VerifyError};

use crate::app::App;
use crate::message::{LoginMessage, Message};
use crate::state::ViewState;

impl App {
    /// Open the login screen: `Anonymous -> Authenticating`.
    pub fn handle_login_requested(&mut self) -> Task<Message> {
        match self.state.session.request_login() {
            Ok(()) => {
                self.state.view = ViewState::login();
            }
            Err(err) => {
                tracing::warn!("login request rejected: {err}");
            }
        }
        Task::none()
    }

    /// Handle login view messages.
    pub fn handle_login_message(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::NameChanged(value) => {
                if let ViewState::Login(login) = &mut self.state.view {
                    login.name = value;
                }
                Task::none()
            }

            LoginMessage::EmailChanged(value) => {
                if let ViewState::Login(login) = &mut self.state.view {
                    login.email = value;
                }
                Task::none()
            }

            LoginMessage::PasswordChanged(value) => {
                if let ViewState::Login(login) = &mut self.state.view {
                    login.password = value;
                }
                Task::none()
            }

            LoginMessage::ModeToggled => {
                if let ViewState::Login(login) = &mut self.state.view {
                    login.mode = login.mode.toggled();
                    login.error = None;
                }
                Task::none()
            }

            LoginMessage::BackClicked => {
                if matches!(self.state.view, ViewState::Login(_)) {
                    if let Err(err) = self.state.session.cancel_login() {
                        tracing::warn!("cancel_login rejected: {err}");
                    }
                    self.state.view = ViewState::Landing;
                }
                Task::none()
            }

            LoginMessage::SubmitClicked => self.handle_login_submit(),

            LoginMessage::VerifyFinished { task, result } => {
                self.handle_verify_finished(task, result)
            }
        }
    }

    /// Kick off mock credential verification.
    fn handle_login_submit(&mut self) -> Task<Message> {
        let task = self.state.next_task();
        let ViewState::Login(login) = &mut self.state.view else {
            return Task::none();
        };
        if login.is_submitting() {
            return Task::none();
        }

        login.error = None;
        login.task = Some(task);

        let email = login.email.clone();
        let password = login.password.clone();
        tracing::info!(task, "submitting credentials to mock verifier");

        Task::perform(
            async move { MockVerifier.verify(&email, &password).await },
            move |result| Message::Login(LoginMessage::VerifyFinished { task, result }),
        )
    }

    /// Apply a finished verification, unless it is stale.
    fn handle_verify_finished(
        &mut self,
        task: u64,
        result: Result<(), VerifyError>,
    ) -> Task<Message> {
        let ViewState::Login(login) = &mut self.state.view else {
            tracing::debug!(task, "dropping verification result for a closed login view");
            return Task::none();
        };
        if login.task != Some(task) {
            tracing::debug!(task, "dropping superseded verification result");
            return Task::none();
        }
        login.task = None;

        match result {
            Ok(()) => {
                let email = login.email.clone();
                let password = login.password.clone();
                match self.state.session.submit_credentials(&email, &password) {
                    Ok(()) => {
                        tracing::info!("login accepted");
                        self.state.view = ViewState::Overview;
                    }
                    Err(err) => {
                        tracing::warn!("credential submission rejected: {err}");
                        if let ViewState::Login(login) = &mut self.state.view {
                            login.error = Some(err.into());
                        }
                    }
                }
            }
            Err(err) => {
                tracing::info!("mock verifier rejected credentials: {err}");
                login.error = Some(err.into());
            }
        }
        Task::none()
    }
}
