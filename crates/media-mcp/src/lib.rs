//! # Media MCP
//!
//! MCP (Model Context Protocol) tool registry for a home media stack:
//! Radarr, Sonarr, TMDB and Plex.
//!
//! ## Overview
//!
//! The media-mcp crate handles:
//! - **Tools**: the [`Tool`] trait, definitions and results
//! - **Registry**: [`McpServer`], which only registers tools the
//!   [`ToolFilter`](media_access::ToolFilter) enables
//! - **Collection tools**: `radarr_get_movies` and `sonarr_get_series`, which
//!   filter, sort and page whole libraries with [`media_query`]
//!
//! Upstream HTTP clients, authentication and the JSON-RPC transport live
//! outside this crate. Collection tools reach upstream through
//! [`CollectionSource`](tools::CollectionSource).
//!
//! ## Tool Access
//!
//! Which tools exist at runtime is decided once, at startup:
//!
//! ```text
//! MEDIA_MCP_* env ─┐
//!                  ├─► ToolFilterConfig ─► ToolFilter ─► McpServer::new ─► register_tools
//! config file ─────┘
//! ```
//!
//! A disabled tool is never registered, so it is absent from
//! [`McpServer::list_tools`] and [`McpServer::call_tool`] reports it as
//! [`McpServerError::ToolNotFound`].
//!
//! ## Usage
//!
//! ```rust
//! use media_access::ToolFilter;
//! use media_mcp::{tools, McpServer};
//! use media_query::{Movie, Series};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let server = McpServer::media(ToolFilter::from_tools(["radarr_get_movies"]));
//!
//! let movies = vec![Movie { id: 1, title: "Heat".into(), ..Default::default() }];
//! let registered = server
//!     .register_tools(tools::collection_tools(Arc::new(movies), Arc::new(Vec::<Series>::new())))
//!     .await;
//! assert_eq!(registered, 1);
//!
//! let result = server
//!     .call_tool("radarr_get_movies", serde_json::json!({ "title": "heat" }))
//!     .await
//!     .unwrap();
//! assert!(!result.is_error);
//! # }
//! ```

pub mod server;
pub mod tools;
pub mod types;

pub use server::{FunctionTool, McpServer, McpServerError, McpServerResult, Tool};
pub use types::*;
