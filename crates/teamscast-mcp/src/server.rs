//! MCP server implementation.
//!
//! [`TeamscastServer`] binds a [`ToolRegistry`] to the MCP wire protocol:
//! `tools/list` returns the registry's descriptors, `tools/call` dispatches
//! by name. Tool names the registry does not recognize are a caller bug and
//! surface as protocol-level errors, not text results.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use tracing::info;

use crate::registry::ToolRegistry;

/// Server metadata reported during initialization.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server name shown to MCP clients.
    pub name: String,
    /// Server version shown to MCP clients.
    pub version: String,
    /// Optional usage instructions for the connected model.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// Generic MCP server delegating tool traffic to a [`ToolRegistry`].
#[derive(Clone)]
pub struct TeamscastServer {
    registry: Arc<dyn ToolRegistry>,
    config: ServerConfig,
}

impl TeamscastServer {
    /// Create a server around a registry, with default metadata.
    pub fn new<R: ToolRegistry + 'static>(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
            config: ServerConfig::default(),
        }
    }

    /// Override the advertised server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Override the advertised server version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the instructions string sent to clients.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.instructions = Some(instructions.into());
        self
    }

    /// Serve over stdio until the client disconnects.
    ///
    /// The host owns the duplex stream; this future resolves when the
    /// session ends.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        info!(
            name = %self.config.name,
            tools = self.registry.tool_count(),
            "serving MCP session over stdio"
        );
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

impl ServerHandler for TeamscastServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::LATEST)
            .with_server_info(Implementation::new(
                self.config.name.clone(),
                self.config.version.clone(),
            ));
        info.instructions = self.config.instructions.clone();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        match self.registry.call(&request.name, args) {
            Some(handler) => handler.await,
            None => Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
