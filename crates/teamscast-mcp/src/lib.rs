//! MCP server infrastructure for Teamscast.
//!
//! This crate wires the Teamscast components into a Model Context Protocol
//! server:
//!
//! - [`ToolRegistry`] — tool registration and dispatch
//! - [`NotifyTools`] — the `send-notification` tool
//! - [`TeamscastServer`] — generic server (implements `ServerHandler`)
//! - [`ServerConfig`] — server metadata (name, version, instructions)
//!
//! # Example
//!
//! ```rust,ignore
//! use teamscast_auth::TokenClient;
//! use teamscast_mcp::{NotifyTools, TeamscastServer};
//! use teamscast_notify::WebhookClient;
//!
//! let tools = NotifyTools::new(TokenClient::new(), WebhookClient::new());
//! TeamscastServer::new(tools).serve_stdio().await?;
//! ```

pub mod registry;
pub mod server;
pub mod tools;

// Re-exports — registry
pub use registry::{ToolRegistry, ToolResult};

// Re-exports — server
pub use server::{ServerConfig, TeamscastServer};

// Re-exports — tools
pub use tools::notify::{NotifyTools, SendArgs, TOOL_NAME};
