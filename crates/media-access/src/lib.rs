//! # Media Access
//!
//! Decides which tools the media MCP server exposes.
//!
//! ## Model
//!
//! - **Tools** are named `<service>_<action>`, e.g. `radarr_get_movies`.
//! - **Branches** group tools by theme (`library-browsing`, `discovery`, ...).
//!   A tool may sit in several branches.
//! - **Profiles** are curated unions of branches (`minimal`, `default`,
//!   `readonly`, `full`).
//!
//! A deployment picks one profile, may add branches, and may exclude or
//! include individual tools. [`ToolFilter`] resolves that into the final
//! enabled set once at startup.
//!
//! ## Usage
//!
//! ```rust
//! use media_access::{ToolCatalog, ToolFilter, ToolFilterConfig};
//!
//! // Built-in default layered with MEDIA_MCP_* variables and the optional
//! // JSON file named by MEDIA_MCP_TOOL_CONFIG.
//! let config = ToolFilterConfig::load_with(None, |key| match key {
//!     "MEDIA_MCP_PROFILE" => Some("readonly".to_string()),
//!     "MEDIA_MCP_EXCLUDE_TOOLS" => Some("plex_get_sessions".to_string()),
//!     _ => None,
//! });
//!
//! let filter = ToolFilter::resolve(&ToolCatalog::builtin(), &config);
//! assert!(filter.is_enabled("radarr_get_queue"));
//! assert!(!filter.is_enabled("plex_get_sessions"));
//! assert!(!filter.is_enabled("radarr_add_movie"));
//! ```
//!
//! Configuration problems never abort startup: unknown profiles fall back to
//! `default`, unknown branches are skipped, and malformed files or list values
//! are logged and ignored.

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod service;
pub mod toolset;

pub use builtin::DEFAULT_PROFILE;
pub use catalog::{ToolBranch, ToolCatalog, ToolProfile};
pub use config::{ConfigLayer, ToolFilterConfig};
pub use error::{CatalogError, ConfigError, ProfileError, ProfileResult};
pub use filter::ToolFilter;
pub use service::Service;
pub use toolset::ToolSet;
