//! Per-invocation environment configuration.
//!
//! Every tool invocation captures its own [`EnvSnapshot`] and converts it
//! into a [`BotConfig`] before any network call is made. Nothing here is
//! cached across invocations, so concurrent invocations never observe each
//! other's environment changes.

use std::fmt;

/// The environment variables Teamscast requires, in reporting order.
pub const REQUIRED_VARS: [&str; 5] = [
    "BOT_ENDPOINT",
    "MICROSOFT_APP_ID",
    "MICROSOFT_APP_PASSWORD",
    "MICROSOFT_APP_TENANT_ID",
    "EMAIL",
];

/// Reads one variable, treating an empty value as absent.
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Point-in-time capture of the required environment variables.
///
/// A snapshot is immutable once taken: later changes to the process
/// environment do not affect it.
#[derive(Clone, Debug)]
pub struct EnvSnapshot {
    endpoint: Option<String>,
    app_id: Option<String>,
    app_password: Option<String>,
    tenant_id: Option<String>,
    email: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current values of all required variables.
    ///
    /// Never fails; absent and empty values are recorded as `None`.
    pub fn capture() -> Self {
        Self {
            endpoint: read_var("BOT_ENDPOINT"),
            app_id: read_var("MICROSOFT_APP_ID"),
            app_password: read_var("MICROSOFT_APP_PASSWORD"),
            tenant_id: read_var("MICROSOFT_APP_TENANT_ID"),
            email: read_var("EMAIL"),
        }
    }

    /// Look up a captured value by variable name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "BOT_ENDPOINT" => &self.endpoint,
            "MICROSOFT_APP_ID" => &self.app_id,
            "MICROSOFT_APP_PASSWORD" => &self.app_password,
            "MICROSOFT_APP_TENANT_ID" => &self.tenant_id,
            "EMAIL" => &self.email,
            _ => return None,
        };
        value.as_deref()
    }

    /// The required variables this snapshot is missing, in [`REQUIRED_VARS`]
    /// order.
    pub fn missing(&self) -> Vec<&'static str> {
        REQUIRED_VARS
            .iter()
            .filter(|&&name| self.get(name).is_none())
            .copied()
            .collect()
    }

    /// Convert the snapshot into a validated configuration.
    ///
    /// Fails with the ordered list of missing variables when any required
    /// value was absent.
    pub fn into_config(self) -> Result<BotConfig, MissingVars> {
        let missing = self.missing();
        if let (Some(endpoint), Some(app_id), Some(app_password), Some(tenant_id), Some(email)) = (
            self.endpoint,
            self.app_id,
            self.app_password,
            self.tenant_id,
            self.email,
        ) {
            Ok(BotConfig {
                endpoint,
                app_id,
                app_password,
                tenant_id,
                email,
            })
        } else {
            Err(MissingVars(missing))
        }
    }
}

/// Validated configuration for one tool invocation.
///
/// Exists only when all five required variables were present in the
/// snapshot it was built from.
#[derive(Clone)]
pub struct BotConfig {
    /// Webhook URL that receives the notification payload.
    pub endpoint: String,
    /// Application (client) id registered with the identity provider.
    pub app_id: String,
    /// Application secret for the client-credentials grant.
    pub app_password: String,
    /// Directory (tenant) id the application lives in.
    pub tenant_id: String,
    /// Recipient address forwarded in the payload.
    pub email: String,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("endpoint", &self.endpoint)
            .field("app_id", &self.app_id)
            .field("app_password", &"[REDACTED]")
            .field("tenant_id", &self.tenant_id)
            .field("email", &self.email)
            .finish()
    }
}

/// The required variables absent from a snapshot, in reporting order.
///
/// `Display` renders the names comma-separated, ready to embed in a
/// caller-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.join(", "))]
pub struct MissingVars(pub Vec<&'static str>);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SET: [(&str, Option<&str>); 5] = [
        ("BOT_ENDPOINT", Some("https://bot.example.com/notify")),
        ("MICROSOFT_APP_ID", Some("app-1")),
        ("MICROSOFT_APP_PASSWORD", Some("s3cret")),
        ("MICROSOFT_APP_TENANT_ID", Some("tenant-1")),
        ("EMAIL", Some("dev@example.com")),
    ];

    #[test]
    fn test_capture_complete_environment() {
        temp_env::with_vars(ALL_SET, || {
            let snapshot = EnvSnapshot::capture();
            assert!(snapshot.missing().is_empty());
            assert_eq!(snapshot.get("MICROSOFT_APP_ID"), Some("app-1"));
            assert_eq!(snapshot.get("EMAIL"), Some("dev@example.com"));
        });
    }

    #[test]
    fn test_missing_reported_in_declaration_order() {
        temp_env::with_vars(
            [
                ("BOT_ENDPOINT", None::<&str>),
                ("MICROSOFT_APP_ID", Some("app-1")),
                ("MICROSOFT_APP_PASSWORD", Some("s3cret")),
                ("MICROSOFT_APP_TENANT_ID", None),
                ("EMAIL", None),
            ],
            || {
                let snapshot = EnvSnapshot::capture();
                assert_eq!(
                    snapshot.missing(),
                    vec!["BOT_ENDPOINT", "MICROSOFT_APP_TENANT_ID", "EMAIL"]
                );
            },
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = ALL_SET;
        vars[2] = ("MICROSOFT_APP_PASSWORD", Some(""));
        temp_env::with_vars(vars, || {
            let snapshot = EnvSnapshot::capture();
            assert_eq!(snapshot.missing(), vec!["MICROSOFT_APP_PASSWORD"]);
            assert_eq!(snapshot.get("MICROSOFT_APP_PASSWORD"), None);
        });
    }

    #[test]
    fn test_into_config_complete() {
        temp_env::with_vars(ALL_SET, || {
            let config = EnvSnapshot::capture()
                .into_config()
                .unwrap_or_else(|missing| panic!("unexpected missing vars: {missing}"));
            assert_eq!(config.endpoint, "https://bot.example.com/notify");
            assert_eq!(config.app_id, "app-1");
            assert_eq!(config.app_password, "s3cret");
            assert_eq!(config.tenant_id, "tenant-1");
            assert_eq!(config.email, "dev@example.com");
        });
    }

    #[test]
    fn test_into_config_reports_missing() {
        temp_env::with_vars(
            [
                ("BOT_ENDPOINT", None::<&str>),
                ("MICROSOFT_APP_ID", None),
                ("MICROSOFT_APP_PASSWORD", Some("s3cret")),
                ("MICROSOFT_APP_TENANT_ID", Some("tenant-1")),
                ("EMAIL", Some("dev@example.com")),
            ],
            || {
                let result = EnvSnapshot::capture().into_config();
                let Err(missing) = result else {
                    panic!("expected missing vars");
                };
                assert_eq!(missing.to_string(), "BOT_ENDPOINT, MICROSOFT_APP_ID");
            },
        );
    }

    #[test]
    fn test_snapshot_survives_later_environment_changes() {
        let snapshot = temp_env::with_vars(ALL_SET, EnvSnapshot::capture);

        // The captured values must not track the environment.
        temp_env::with_vars([("MICROSOFT_APP_ID", Some("app-2"))], || {
            assert_eq!(snapshot.get("MICROSOFT_APP_ID"), Some("app-1"));
        });
    }

    #[test]
    fn test_get_unknown_name() {
        let snapshot = temp_env::with_vars(ALL_SET, EnvSnapshot::capture);
        assert_eq!(snapshot.get("UNRELATED"), None);
    }

    #[test]
    fn test_config_debug_redacts_password() {
        temp_env::with_vars(ALL_SET, || {
            let Ok(config) = EnvSnapshot::capture().into_config() else {
                panic!("expected complete config");
            };
            let rendered = format!("{config:?}");
            assert!(rendered.contains("[REDACTED]"));
            assert!(!rendered.contains("s3cret"));
        });
    }

    #[test]
    fn test_missing_vars_display() {
        let missing = MissingVars(vec!["BOT_ENDPOINT", "EMAIL"]);
        assert_eq!(missing.to_string(), "BOT_ENDPOINT, EMAIL");
    }
}
