//! Notifications module.
//!
//! Provides the notification type and the sink trait core services use to
//! report user-visible outcomes. Runtime adapters (HTTP host, desktop shell)
//! implement the sink to translate notifications into platform feedback.

mod notification;
mod sink;

pub use notification::*;
pub use sink::*;
