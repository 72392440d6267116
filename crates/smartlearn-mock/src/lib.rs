//! Mocked backend for SmartLearn.
//!
//! Every "AI-powered" response in the application comes from this crate: a
//! fixed-delay timer followed by a hardcoded literal, standing in for a real
//! backend call. The async functions here are designed to be driven with
//! Iced's `Task::perform`.
//!
//! Nothing in this crate parses, recognizes, or recommends anything. The
//! seams (notably [`auth::CredentialVerifier`]) are where real services
//! would be slotted in.

pub mod auth;
pub mod chat;
pub mod exam;
pub mod explain;
pub mod handwriting;
pub mod language;
pub mod progress;
