//! Delivery error types.

/// Errors that can occur while posting a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The endpoint answered with an error status.
    ///
    /// `body` is the response text, read in full.
    #[error("HTTP {status} - {body}")]
    Status {
        /// HTTP status code (≥ 400).
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The POST failed before an HTTP status was available.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}
