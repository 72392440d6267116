//! SmartLearn - Desktop Learning Platform Demo
//!
//! A front-end demo of an education platform: a landing screen, a mocked
//! login flow, and a dashboard of six mocked "AI" learning tools.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message,
//! Update, View). All session and navigation transitions are delegated to
//! `smartlearn-core`; all "intelligence" comes from `smartlearn-mock`.

pub mod app;
pub mod component;
pub mod error;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
