#![forbid(unsafe_code)]

//! Teamscast MCP server binary.
//!
//! Serves the `send-notification` tool over MCP stdio. Configuration comes
//! from the process environment, re-read on every invocation:
//! `BOT_ENDPOINT`, `MICROSOFT_APP_ID`, `MICROSOFT_APP_PASSWORD`,
//! `MICROSOFT_APP_TENANT_ID`, `EMAIL`. A `.env` file is honored when
//! present. No CLI flags.

use anyhow::Result;
use teamscast_auth::TokenClient;
use teamscast_mcp::{NotifyTools, TeamscastServer};
use teamscast_notify::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    // stdout carries the MCP session; log to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let tools = NotifyTools::new(TokenClient::new(), WebhookClient::new());

    TeamscastServer::new(tools)
        .with_instructions(
            "Send Microsoft Teams notifications about agent work. Requires the \
             bot endpoint and application credentials in the environment.",
        )
        .serve_stdio()
        .await
}
