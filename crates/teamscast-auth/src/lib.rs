//! OAuth2 client-credentials token acquisition for Teamscast.
//!
//! Implements the application-only grant against the Microsoft identity
//! platform: one form-encoded POST to the tenant's token endpoint, scoped
//! to `{app_id}/.default`, returning a [`BearerToken`] or a descriptive
//! [`AuthError`].
//!
//! There is no token cache: every call re-authenticates. Invocations are
//! independent by design, and a cache without expiry handling would trade
//! one failure mode for a worse one.

mod error;
mod token;

pub use error::AuthError;
pub use token::{BearerToken, TokenClient, DEFAULT_AUTHORITY};
