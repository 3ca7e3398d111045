//! The `send-notification` tool.
//!
//! Provides `NotifyTools`, a [`ToolRegistry`] with a single tool that runs
//! the full delivery sequence: capture the environment, acquire a
//! client-credentials token, post the payload to the configured webhook.
//! Every stage failure collapses into a single text content item; only
//! malformed caller input is a protocol-level error.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use teamscast_auth::TokenClient;
use teamscast_core::EnvSnapshot;
use teamscast_notify::{Notification, WebhookClient};

use crate::registry::{ToolRegistry, ToolResult};

/// Name of the single tool this registry exposes.
pub const TOOL_NAME: &str = "send-notification";

const TOOL_DESCRIPTION: &str = "Send a notification message to the user. Supports markdown \
     formatting for messages. Use backticks for code blocks and inline code. Use square \
     brackets for placeholders.";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for the send-notification tool.
#[derive(Debug, Deserialize)]
pub struct SendArgs {
    /// Message text; markdown supported.
    pub message: String,
    /// Project the message belongs to.
    pub project: String,
}

// ---------------------------------------------------------------------------
// NotifyTools
// ---------------------------------------------------------------------------

/// Registry exposing the `send-notification` tool.
///
/// Holds the network clients; the configuration itself is re-read from the
/// environment on every call, so invocations stay independent.
pub struct NotifyTools {
    auth: Arc<TokenClient>,
    webhook: Arc<WebhookClient>,
}

impl NotifyTools {
    /// Create the registry around the given clients.
    pub fn new(auth: TokenClient, webhook: WebhookClient) -> Self {
        Self {
            auth: Arc::new(auth),
            webhook: Arc::new(webhook),
        }
    }
}

impl ToolRegistry for NotifyTools {
    fn tools(&self) -> Vec<Tool> {
        vec![make_tool(
            TOOL_NAME,
            TOOL_DESCRIPTION,
            json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "Notification text"
                    },
                    "project": {
                        "type": "string",
                        "description": "Project name"
                    }
                },
                "required": ["message", "project"]
            }),
        )]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        if name != TOOL_NAME {
            return None;
        }

        let auth = Arc::clone(&self.auth);
        let webhook = Arc::clone(&self.webhook);

        Some(Box::pin(async move {
            if args.is_null() {
                return Err(ErrorData::invalid_params("Missing arguments", None));
            }
            let args: SendArgs = serde_json::from_value(args)
                .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
            if args.message.is_empty() || args.project.is_empty() {
                return Err(ErrorData::invalid_params("Missing message or project", None));
            }

            match deliver(&auth, &webhook, &args).await {
                Ok(text) => Ok(text_result(text)),
                // Catch-all boundary: whatever escapes the staged handling
                // becomes a text result, never a dead session.
                Err(e) => Ok(text_result(format!("Error sending notification: {e}"))),
            }
        }))
    }
}

/// Runs the configuration, authentication, and delivery stages.
///
/// Expected failures are rendered into the returned text; the `Err` arm is
/// reserved for anything unforeseen.
async fn deliver(
    auth: &TokenClient,
    webhook: &WebhookClient,
    args: &SendArgs,
) -> anyhow::Result<String> {
    let snapshot = EnvSnapshot::capture();
    let config = match snapshot.into_config() {
        Ok(config) => config,
        Err(missing) => {
            return Ok(format!(
                "Missing required environment variables: {missing}"
            ));
        }
    };

    let token = match auth
        .acquire(&config.app_id, &config.app_password, &config.tenant_id)
        .await
    {
        Ok(token) => token,
        Err(e) => return Ok(format!("Authentication failed: {e}")),
    };

    let notification = Notification {
        email: Some(config.email),
        message: args.message.clone(),
        project: args.project.clone(),
    };

    if let Err(e) = webhook
        .send(&config.endpoint, token.secret(), &notification)
        .await
    {
        return Ok(format!("Failed to send notification: {e}"));
    }

    debug!(project = %args.project, "notification delivered");
    Ok(format!(
        "Sent notification message for project '{}' with content: {}",
        args.project, args.message
    ))
}

// ============================================================================
// Tests
// ============================================================================
