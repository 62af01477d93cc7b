//! MCP server implementation
//!
//! The tool registry. Every registration is checked against the
//! [`ToolFilter`] the server was built with, so disabled tools are never
//! listed and never callable.

use crate::types::*;
use async_trait::async_trait;
use media_access::{Service, ToolCatalog, ToolFilter, ToolFilterConfig};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// MCP server error types.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Tool not found, or disabled by the tool filter
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for MCP server operations.
pub type McpServerResult<T> = Result<T, McpServerError>;

/// Trait for tool implementations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with given arguments.
    async fn execute(&self, args: serde_json::Value) -> McpServerResult<ToolResult>;
}

/// Media MCP server.
///
/// Built once at startup with a resolved [`ToolFilter`] and shared by
/// reference afterwards.
///
/// # Example
///
/// ```
/// use media_access::ToolFilter;
/// use media_mcp::McpServer;
///
/// let filter = ToolFilter::from_tools(["radarr_get_movies"]);
/// let server = McpServer::new("media-mcp", "0.1.0", filter);
/// assert!(server.is_enabled("radarr_get_movies"));
/// assert!(!server.is_enabled("radarr_delete_movie"));
/// ```
pub struct McpServer {
    /// Server info
    info: ServerInfo,

    /// Enabled-tool set, fixed at construction
    filter: ToolFilter,

    /// Catalog used for branch listings
    catalog: ToolCatalog,

    /// Registered tools
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,

    /// Tool categories
    categories: Arc<RwLock<Vec<String>>>,
}

impl McpServer {
    /// Create a new MCP server over the built-in catalog.
    pub fn new(name: impl Into<String>, version: impl Into<String>, filter: ToolFilter) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            filter,
            catalog: ToolCatalog::builtin(),
            tools: Arc::new(RwLock::new(HashMap::new())),
            categories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create with the default server name and version.
    pub fn media(filter: ToolFilter) -> Self {
        Self::new("media-mcp", env!("CARGO_PKG_VERSION"), filter)
    }

    /// Create from the process environment and the built-in catalog.
    pub fn from_env() -> Self {
        let config = ToolFilterConfig::from_env();
        Self::media(ToolFilter::resolve(&ToolCatalog::builtin(), &config))
    }

    /// Use a custom catalog for branch listings.
    pub fn with_catalog(mut self, catalog: ToolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Check if a tool passes the filter.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.filter.is_enabled(name)
    }

    /// Register a tool if the filter enables it.
    ///
    /// Returns `true` if the tool was registered.
    pub async fn register_tool(&self, tool: Arc<dyn Tool>) -> bool {
        let definition = tool.definition();
        let name = definition.name.clone();

        if !self.filter.is_enabled(&name) {
            debug!(tool = %name, "Tool disabled by filter, skipping");
            return false;
        }

        // Add category if new
        if let Some(ref category) = definition.category {
            let mut categories = self.categories.write().await;
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        let mut tools = self.tools.write().await;
        if tools.insert(name.clone(), tool).is_some() {
            warn!(tool = %name, "Replaced previously registered tool");
        } else {
            debug!(tool = %name, "Registered tool");
        }
        true
    }

    /// Register multiple tools.
    ///
    /// Returns how many were registered.
    pub async fn register_tools(&self, tools: Vec<Arc<dyn Tool>>) -> usize {
        let offered = tools.len();
        let mut registered = 0;
        for tool in tools {
            if self.register_tool(tool).await {
                registered += 1;
            }
        }
        info!(offered, registered, "Registered tools");
        registered
    }

    /// Get all tool definitions, sorted by name.
    pub async fn list_tools(&self) -> Vec<ToolDefinition> {
        let tools = self.tools.read().await;
        let mut definitions: Vec<ToolDefinition> = tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Get tools by category.
    pub async fn list_tools_by_category(&self, category: &str) -> Vec<ToolDefinition> {
        self.list_tools()
            .await
            .into_iter()
            .filter(|d| d.category.as_deref() == Some(category))
            .collect()
    }

    /// Get tools by upstream service.
    pub async fn list_tools_by_service(&self, service: Service) -> Vec<ToolDefinition> {
        self.list_tools()
            .await
            .into_iter()
            .filter(|d| d.service == Some(service))
            .collect()
    }

    /// Get registered tools that belong to a catalog branch.
    ///
    /// An unknown branch yields an empty list.
    pub async fn list_tools_by_branch(&self, branch: &str) -> Vec<ToolDefinition> {
        let Some(branch) = self.catalog.branch(branch) else {
            return Vec::new();
        };
        self.list_tools()
            .await
            .into_iter()
            .filter(|d| branch.tools.contains(&d.name))
            .collect()
    }

    /// Get all categories.
    pub async fn list_categories(&self) -> Vec<String> {
        self.categories.read().await.clone()
    }

    /// Execute a tool.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> McpServerResult<ToolResult> {
        let tool = {
            let tools = self.tools.read().await;
            tools
                .get(name)
                .cloned()
                .ok_or_else(|| McpServerError::ToolNotFound(name.to_string()))?
        };

        tool.execute(arguments).await
    }

    /// Execute a parsed tool call.
    pub async fn handle_call(&self, call: ToolCall) -> McpServerResult<ToolResult> {
        self.call_tool(&call.name, call.arguments).await
    }

    /// Get server info.
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Get the tool filter.
    pub fn filter(&self) -> &ToolFilter {
        &self.filter
    }
}

/// Simple tool wrapper for function-based tools.
pub struct FunctionTool<F>
where
    F: Fn(serde_json::Value) -> McpServerResult<ToolResult> + Send + Sync,
{
    definition: ToolDefinition,
    handler: F,
}

impl<F> FunctionTool<F>
where
    F: Fn(serde_json::Value) -> McpServerResult<ToolResult> + Send + Sync,
{
    /// Create a new function-based tool.
    pub fn new(definition: ToolDefinition, handler: F) -> Self {
        Self {
            definition,
            handler,
        }
    }
}

#[async_trait]
impl<F> Tool for FunctionTool<F>
where
    F: Fn(serde_json::Value) -> McpServerResult<ToolResult> + Send + Sync,
{
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn execute(&self, args: serde_json::Value) -> McpServerResult<ToolResult> {
        (self.handler)(args)
    }
}
