//! The session controller and its transition rules.

use thiserror::Error;

use crate::feature::FeatureId;

/// Top-level authentication status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No login flow in progress; the landing screen is shown.
    #[default]
    Anonymous,
    /// The login screen is shown; credentials have not been accepted yet.
    Authenticating,
    /// Credentials were accepted; the dashboard is reachable.
    Authenticated,
}

/// Which part of the dashboard is visible while authenticated.
///
/// Meaningful only while [`SessionState::Authenticated`]; it is reset to
/// [`DashboardView::Overview`] whenever the session leaves that state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// The feature grid.
    #[default]
    Overview,
    /// Exactly one feature screen. Entering another feature replaces this,
    /// it never stacks.
    ActiveFeature(FeatureId),
}

/// Errors produced by session transitions.
///
/// `InvalidCredentials` is the only user-facing error in the application.
/// `InvalidTransition` is a contract guard for callers invoking an
/// operation from the wrong state; it is logged, never surfaced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Identifier or secret was empty at submission.
    #[error("please fill in all required fields")]
    InvalidCredentials,

    /// An operation was invoked from a state it is not defined for.
    #[error("'{operation}' is not valid while {state:?}")]
    InvalidTransition {
        /// The operation that was attempted.
        operation: &'static str,
        /// The session state it was attempted from.
        state: SessionState,
    },
}

/// The session/navigation controller.
///
/// Owns the authoritative [`SessionState`] and [`DashboardView`]. Every
/// transition either succeeds and mutates both values consistently, or
/// fails and leaves them untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    dashboard: DashboardView,
}

impl Session {
    /// A fresh session: anonymous, dashboard at the overview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current authentication status.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current dashboard view.
    pub fn dashboard(&self) -> DashboardView {
        self.dashboard
    }

    /// The active feature, if one is open.
    pub fn active_feature(&self) -> Option<FeatureId> {
        match self.dashboard {
            DashboardView::ActiveFeature(id) => Some(id),
            DashboardView::Overview => None,
        }
    }

    /// Begin the login flow: `Anonymous -> Authenticating`.
    pub fn request_login(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Anonymous => {
                self.state = SessionState::Authenticating;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                operation: "request_login",
                state,
            }),
        }
    }

    /// Submit credentials: `Authenticating -> Authenticated`.
    ///
    /// Mock policy: any pair of non-empty fields succeeds. Real verification
    /// belongs to an external collaborator; this method only enforces the
    /// emptiness rule and the state transition. On success the dashboard is
    /// reset to the overview.
    pub fn submit_credentials(
        &mut self,
        identifier: &str,
        secret: &str,
    ) -> Result<(), SessionError> {
        if self.state != SessionState::Authenticating {
            return Err(SessionError::InvalidTransition {
                operation: "submit_credentials",
                state: self.state,
            });
        }
        if identifier.trim().is_empty() || secret.trim().is_empty() {
            return Err(SessionError::InvalidCredentials);
        }
        self.state = SessionState::Authenticated;
        self.dashboard = DashboardView::Overview;
        Ok(())
    }

    /// Abandon the login flow: `Authenticating -> Anonymous`.
    pub fn cancel_login(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Authenticating => {
                self.state = SessionState::Anonymous;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                operation: "cancel_login",
                state,
            }),
        }
    }

    /// End the session: `Authenticated -> Anonymous`.
    ///
    /// Resets the dashboard to the overview as part of the same transition,
    /// so a later login never resumes inside a feature.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Authenticated => {
                self.state = SessionState::Anonymous;
                self.dashboard = DashboardView::Overview;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                operation: "logout",
                state,
            }),
        }
    }

    /// Open a feature screen. Valid whenever authenticated; an already
    /// active feature is replaced, never stacked.
    pub fn select_feature(&mut self, feature: FeatureId) -> Result<(), SessionError> {
        if self.state != SessionState::Authenticated {
            return Err(SessionError::InvalidTransition {
                operation: "select_feature",
                state: self.state,
            });
        }
        self.dashboard = DashboardView::ActiveFeature(feature);
        Ok(())
    }

    /// Leave the active feature: `ActiveFeature(_) -> Overview`.
    pub fn exit_feature(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Authenticated
            || self.dashboard == DashboardView::Overview
        {
            return Err(SessionError::InvalidTransition {
                operation: "exit_feature",
                state: self.state,
            });
        }
        self.dashboard = DashboardView::Overview;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated() -> Session {
        let mut session = Session::new();
        session.request_login().unwrap();
        session.submit_credentials("a@b.com", "pw").unwrap();
        session
    }

    #[test]
    fn fresh_session_is_anonymous_at_overview() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(session.dashboard(), DashboardView::Overview);
    }

    #[test]
    fn login_flow_happy_path() {
        let mut session = Session::new();
        session.request_login().unwrap();
        assert_eq!(session.state(), SessionState::Authenticating);
        session.submit_credentials("a@b.com", "pw").unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.dashboard(), DashboardView::Overview);
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let mut session = Session::new();
        session.request_login().unwrap();
        assert_eq!(
            session.submit_credentials("", "x"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(session.state(), SessionState::Authenticating);
    }

    #[test]
    fn whitespace_only_secret_is_rejected() {
        let mut session = Session::new();
        session.request_login().unwrap();
        assert_eq!(
            session.submit_credentials("a@b.com", "   "),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(session.state(), SessionState::Authenticating);
    }

    #[test]
    fn cancel_returns_to_anonymous() {
        let mut session = Session::new();
        session.request_login().unwrap();
        session.cancel_login().unwrap();
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn submit_outside_login_flow_is_guarded() {
        let mut session = Session::new();
        assert!(matches!(
            session.submit_credentials("a@b.com", "pw"),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn select_then_exit_returns_to_overview() {
        for feature in FeatureId::ALL {
            let mut session = authenticated();
            session.select_feature(feature).unwrap();
            assert_eq!(session.active_feature(), Some(feature));
            session.exit_feature().unwrap();
            assert_eq!(session.dashboard(), DashboardView::Overview);
        }
    }

    #[test]
    fn selecting_twice_keeps_only_the_second() {
        let mut session = authenticated();
        session.select_feature(FeatureId::Progress).unwrap();
        session.select_feature(FeatureId::ChatPdf).unwrap();
        assert_eq!(session.active_feature(), Some(FeatureId::ChatPdf));
    }

    #[test]
    fn logout_from_feature_resets_dashboard() {
        let mut session = authenticated();
        session.select_feature(FeatureId::Handwriting).unwrap();
        session.logout().unwrap();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(session.dashboard(), DashboardView::Overview);
    }

    #[test]
    fn select_feature_requires_authentication() {
        let mut session = Session::new();
        assert!(matches!(
            session.select_feature(FeatureId::Progress),
            Err(SessionError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn exit_feature_from_overview_is_guarded() {
        let mut session = authenticated();
        assert!(matches!(
            session.exit_feature(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert_eq!(session.dashboard(), DashboardView::Overview);
    }
}
