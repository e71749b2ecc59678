//! # Intent Handlers
//!
//! Handlers organized by domain. Each takes the state mutably and returns the
//! effects the intent requires; [`AppState::apply`](super::state::AppState::apply)
//! routes intents here.

pub mod activity;
pub mod modal;
pub mod notification;
pub mod wallet;
