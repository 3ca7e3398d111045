//! Tools exposed by the Teamscast MCP server.

pub mod notify;
