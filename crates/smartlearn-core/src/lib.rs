//! Session and navigation state machine for SmartLearn.
//!
//! This crate owns the two pieces of state that decide what the application
//! shows: the [`SessionState`] (anonymous / authenticating / authenticated)
//! and, once authenticated, the [`DashboardView`] (overview or a single
//! active feature). All transitions go through [`Session`], which is the
//! sole authority for changing either value.
//!
//! The crate is deliberately free of UI, I/O, and async concerns so the
//! transition rules can be tested exhaustively.

mod feature;
mod session;

pub use feature::{FeatureId, UnknownFeature};
pub use session::{DashboardView, Session, SessionError, SessionState};
