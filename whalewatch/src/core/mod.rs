//! # Core Abstractions
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Boundary port traits (`WalletStateResolver`, `NotificationSender`, `ChainEventSource`)
//! - **[`clock`]**: Injectable wall clock
//!
//! Ports are bundled in [`Services`] and injected into the app, so tests can
//! hand in doubles:
//!
//! ```rust,ignore
//! let services = Services::none().with_notifier(Arc::new(RecordingNotifier::default()));
//! let app = App::with_parts(config, services, clock, rng, handle);
//! ```

pub mod clock;
pub mod error;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AppError, Result};
pub use service::{ChainEventSource, NotificationSender, Services, WalletStateResolver};
