//! Tool registry trait for the MCP server.
//!
//! The [`ToolRegistry`] trait abstracts over tool registration and
//! dispatch: the server delegates `list_tools` and `call_tool` to the
//! registry it holds, and stays ignorant of what the tools actually do.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for async tool handler results.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Trait for registering and dispatching MCP tools.
///
/// # Example
///
/// ```rust,ignore
/// struct MyTools { /* ... */ }
///
/// impl ToolRegistry for MyTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "my_tool" => Some(Box::pin(self.handle_my_tool(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns information about all available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;
    use serde_json::json;
    use std::sync::Arc;

    fn make_tool(name: &str, description: &str) -> Tool {
        Tool::new(
            name.to_string(),
            description.to_string(),
            Arc::new(serde_json::Map::new()),
        )
    }

    struct SingleToolRegistry {
        tool: Tool,
    }

    impl ToolRegistry for SingleToolRegistry {
        fn tools(&self) -> Vec<Tool> {
            vec![self.tool.clone()]
        }

        fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
            if self.has_tool(name) {
                let name = name.to_string();
                Some(Box::pin(async move {
                    Ok(CallToolResult::success(vec![Content::text(format!(
                        "called: {name}"
                    ))]))
                }))
            } else {
                None
            }
        }
    }

    fn registry() -> SingleToolRegistry {
        SingleToolRegistry {
            tool: make_tool("send-notification", "Deliver a message"),
        }
    }

    #[test]
    fn test_tool_count() {
        assert_eq!(registry().tool_count(), 1);
    }

    #[test]
    fn test_has_tool() {
        let registry = registry();
        assert!(registry.has_tool("send-notification"));
        assert!(!registry.has_tool("send-email"));
    }

    #[tokio::test]
    async fn test_call_known_tool() {
        let future = registry().call("send-notification", json!({})).unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_call_unknown_tool() {
        assert!(registry().call("missing", json!({})).is_none());
    }

    #[test]
    fn test_trait_object_safety() {
        fn _assert_object_safe(_: &dyn ToolRegistry) {}
    }
}
