//! Property tests for the session state machine.
//!
//! Drives `Session` with arbitrary operation sequences and checks the
//! invariants that hold for every interleaving.

use proptest::prelude::{Just, Strategy, prop_oneof, proptest};

use smartlearn_core::{DashboardView, FeatureId, Session, SessionState};

/// One session operation, applied best-effort (errors are expected for
/// out-of-state calls and must leave the session unchanged).
#[derive(Debug, Clone)]
enum Op {
    RequestLogin,
    Submit { identifier: String, secret: String },
    CancelLogin,
    Logout,
    Select(FeatureId),
    ExitFeature,
}

fn feature_strategy() -> impl Strategy<Value = FeatureId> {
    prop_oneof![
        Just(FeatureId::ExplainLikeChild),
        Just(FeatureId::LocalLanguage),
        Just(FeatureId::Handwriting),
        Just(FeatureId::ExamScanner),
        Just(FeatureId::ChatPdf),
        Just(FeatureId::Progress),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::RequestLogin),
        ("[a-z]{0,8}", "[a-z]{0,8}").prop_map(|(identifier, secret)| Op::Submit {
            identifier,
            secret
        }),
        Just(Op::CancelLogin),
        Just(Op::Logout),
        feature_strategy().prop_map(Op::Select),
        Just(Op::ExitFeature),
    ]
}

fn apply(session: &mut Session, op: &Op) {
    let before = session.clone();
    let result = match op {
        Op::RequestLogin => session.request_login(),
        Op::Submit { identifier, secret } => session.submit_credentials(identifier, secret),
        Op::CancelLogin => session.cancel_login(),
        Op::Logout => session.logout(),
        Op::Select(feature) => session.select_feature(*feature),
        Op::ExitFeature => session.exit_feature(),
    };
    if result.is_err() {
        assert_eq!(*session, before, "failed transition must not mutate state");
    }
}

proptest! {
    /// The dashboard never holds an active feature outside an
    /// authenticated session, and authentication is only ever reached
    /// through a submit with non-empty fields.
    #[test]
    fn dashboard_is_gated_by_authentication(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut session = Session::new();
        let mut was_authenticating = false;

        for op in &ops {
            let authenticated_before = session.state() == SessionState::Authenticated;
            if session.state() == SessionState::Authenticating {
                was_authenticating = true;
            }
            apply(&mut session, op);

            if session.state() != SessionState::Authenticated {
                assert_eq!(session.dashboard(), DashboardView::Overview);
            }
            if session.state() == SessionState::Authenticated && !authenticated_before {
                // The only way in is a successful submit from Authenticating.
                assert!(was_authenticating);
                match op {
                    Op::Submit { identifier, secret } => {
                        assert!(!identifier.trim().is_empty());
                        assert!(!secret.trim().is_empty());
                    }
                    other => panic!("entered Authenticated via {other:?}"),
                }
            }
        }
    }

    /// Selecting a feature and immediately exiting always lands back on
    /// the overview, for every feature and every prior history.
    #[test]
    fn select_then_exit_is_identity_on_overview(
        ops in proptest::collection::vec(op_strategy(), 0..20),
        feature in feature_strategy(),
    ) {
        let mut session = Session::new();
        for op in &ops {
            apply(&mut session, op);
        }
        if session.select_feature(feature).is_ok() {
            session.exit_feature().expect("active feature must be exitable");
            assert_eq!(session.dashboard(), DashboardView::Overview);
        }
    }

    /// At most one feature is ever active: a successful select replaces
    /// whatever was active before.
    #[test]
    fn select_replaces_never_stacks(
        first in feature_strategy(),
        second in feature_strategy(),
    ) {
        let mut session = Session::new();
        session.request_login().unwrap();
        session.submit_credentials("student@smartlearn.app", "pw").unwrap();
        session.select_feature(first).unwrap();
        session.select_feature(second).unwrap();
        assert_eq!(session.active_feature(), Some(second));
    }
}
