//! Token endpoint client.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AuthError;

/// Default authority host for the Microsoft identity platform.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Fallback reason when the provider returns neither a token nor an
/// `error_description`.
const GENERIC_FAILURE: &str = "Failed to acquire token";

/// A bearer access token issued by the identity provider.
///
/// `Debug` is redacted so the secret never reaches logs.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap an access-token string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw token, for the `Authorization: Bearer` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

/// Token response from the identity provider.
///
/// Success and failure share one shape: a missing `access_token` marks a
/// rejection, with `error_description` as the provider's explanation.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

/// Client-credentials client for the Microsoft identity platform.
///
/// One network round trip per [`acquire`](TokenClient::acquire) call; no
/// retry, no caching.
pub struct TokenClient {
    http: reqwest::Client,
    authority: String,
}

impl TokenClient {
    /// Create a client against the public Microsoft authority.
    pub fn new() -> Self {
        Self::with_authority(DEFAULT_AUTHORITY)
    }

    /// Create a client against a specific authority base URL.
    ///
    /// Used by tests to point at a local mock server.
    pub fn with_authority(authority: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            authority: authority.into(),
        }
    }

    /// Acquire a token for the application itself (no end user).
    ///
    /// Requests the client-credentials grant scoped to `{app_id}/.default`
    /// from `{authority}/{tenant_id}/oauth2/v2.0/token`.
    pub async fn acquire(
        &self,
        app_id: &str,
        app_secret: &str,
        tenant_id: &str,
    ) -> Result<BearerToken, AuthError> {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority.trim_end_matches('/'),
            tenant_id
        );
        let scope = format!("{app_id}/.default");

        debug!(%token_url, client_id = %app_id, "requesting client-credentials token");

        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", app_id),
                ("client_secret", app_secret),
                ("scope", &scope),
            ])
            .send()
            .await?;

        // The provider reports rejections in the JSON body, not the status
        // line, so decode before looking at anything else.
        let body: TokenResponse = response.json().await?;

        match body.access_token {
            Some(token) => Ok(BearerToken::new(token)),
            None => {
                let reason = body
                    .error_description
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                warn!("token endpoint rejected the request: {reason}");
                Err(AuthError::Rejected(reason))
            }
        }
    }
}

impl Default for TokenClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
