//! # Screen Modules
//!
//! The dashboard is a single screen with two modal dialogs on top of it.
//!
//! - **[`dashboard`]**: Wallet grid and live activity feed
//! - **[`add_wallet`]**: Track-a-wallet form
//! - **[`channel_setup`]**: Telegram connect / test / disconnect
//!
//! ## Rendering Pattern
//!
//! Screens receive a **cloned state snapshot** for rendering and call
//! `app.handle_*` for actions:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     if button.clicked() {
//!         app.handle_open_add_wallet();
//!     }
//! }
//! ```
//!
//! Dialogs edit a local copy of their form and write it back only when it
//! changed, so no lock is held while egui runs.

pub mod add_wallet;
pub mod channel_setup;
pub mod dashboard;
