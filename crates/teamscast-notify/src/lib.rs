//! Webhook delivery for Teamscast notifications.
//!
//! One bearer-authorized JSON POST per notification. The endpoint's answer
//! is classified by status line only: anything below 400 is delivered,
//! anything at or above it is a [`NotifyError::Status`] carrying the
//! response body. No retry, no timeout override, no streaming.

mod error;
mod sender;

pub use error::NotifyError;
pub use sender::{Notification, WebhookClient};
