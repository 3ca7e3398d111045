//! Auth-specific error types.

/// Errors that can occur while acquiring a token.
///
/// The `Display` text of each variant is exactly the reason string
/// surfaced to callers, so no prefix is added here.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The identity provider answered but issued no access token.
    ///
    /// Carries the provider's `error_description` when present, otherwise
    /// a generic reason.
    #[error("{0}")]
    Rejected(String),

    /// The HTTP exchange with the token endpoint failed before a usable
    /// response was decoded.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}
