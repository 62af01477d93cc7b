//! MCP tools
//!
//! Tool implementations grouped by what they do. Each group exposes a
//! constructor returning its tools ready for [`McpServer::register_tools`],
//! which drops the ones the tool filter disables.
//!
//! [`McpServer::register_tools`]: crate::server::McpServer::register_tools

pub mod collections;

pub use collections::*;
