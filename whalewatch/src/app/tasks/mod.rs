//! # Async Tasks
//!
//! Interval timers and port calls running on the Tokio runtime.

pub mod ports;
pub mod timers;

pub use ports::Subscription;
pub use timers::TimerHandle;
