//! Tool filter configuration.
//!
//! Configuration is layered, lowest precedence first:
//!
//! 1. Built-in default: profile `default`, no branches, no overrides
//! 2. JSON config file (path from `MEDIA_MCP_TOOL_CONFIG`)
//! 3. Environment variables, field by field
//!
//! Environment variables:
//! - `MEDIA_MCP_TOOL_CONFIG`: Path to a JSON config file
//! - `MEDIA_MCP_PROFILE`: Profile name
//! - `MEDIA_MCP_BRANCHES`: Additional branches
//! - `MEDIA_MCP_EXCLUDE_TOOLS`: Tools to remove
//! - `MEDIA_MCP_INCLUDE_TOOLS`: Tools to add back, applied after exclusion
//!
//! List variables take either `a,b,c` or a JSON array (`["a","b"]`).
//!
//! Nothing in this module fails tool registration. A missing file is
//! skipped, and a malformed file or list value is logged and ignored so the
//! previous layer stands.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::builtin::DEFAULT_PROFILE;
use crate::error::ConfigError;

/// Environment variable naming the JSON config file.
pub const ENV_CONFIG_PATH: &str = "MEDIA_MCP_TOOL_CONFIG";
/// Environment variable overriding the profile.
pub const ENV_PROFILE: &str = "MEDIA_MCP_PROFILE";
/// Environment variable overriding the additional branches.
pub const ENV_BRANCHES: &str = "MEDIA_MCP_BRANCHES";
/// Environment variable overriding the excluded tools.
pub const ENV_EXCLUDE_TOOLS: &str = "MEDIA_MCP_EXCLUDE_TOOLS";
/// Environment variable overriding the included tools.
pub const ENV_INCLUDE_TOOLS: &str = "MEDIA_MCP_INCLUDE_TOOLS";

/// Which tools a deployment exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFilterConfig {
    /// Profile to start from.
    pub profile: String,

    /// Branches added on top of the profile.
    #[serde(default)]
    pub additional_branches: Vec<String>,

    /// Tools removed after profile and branch expansion.
    #[serde(default)]
    pub exclude_tools: Vec<String>,

    /// Tools added last; wins over `exclude_tools`.
    #[serde(default)]
    pub include_tools: Vec<String>,
}

impl Default for ToolFilterConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            additional_branches: Vec::new(),
            exclude_tools: Vec::new(),
            include_tools: Vec::new(),
        }
    }
}

/// One configuration layer. Absent fields leave the layer below untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub additional_branches: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_tools: Option<Vec<String>>,
    #[serde(default)]
    pub include_tools: Option<Vec<String>>,
}

impl ConfigLayer {
    /// Parse a JSON config document.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a JSON config file. A missing file yields `Ok(None)`.
    pub fn read_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Build a layer from environment lookups.
    ///
    /// Blank values do not override. Malformed list values are logged and
    /// dropped from the layer.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup(ENV_PROFILE)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let list = |key: &str| -> Option<Vec<String>> {
            let value = lookup(key)?;
            match parse_tool_list(key, &value) {
                Ok(list) => list,
                Err(e) => {
                    warn!("{}; keeping previous value", e);
                    None
                }
            }
        };

        Self {
            profile,
            additional_branches: list(ENV_BRANCHES),
            exclude_tools: list(ENV_EXCLUDE_TOOLS),
            include_tools: list(ENV_INCLUDE_TOOLS),
        }
    }
}

/// Parse a list-valued environment variable.
///
/// Returns `Ok(None)` for a blank value. Values starting with `[` must be a
/// JSON array of strings; anything else is split on commas. Blank entries
/// are dropped.
///
/// ```
/// use media_access::config::parse_tool_list;
///
/// let list = parse_tool_list("KEY", "plex_search, tmdb_search_tv,").unwrap();
/// assert_eq!(list, Some(vec!["plex_search".to_string(), "tmdb_search_tv".to_string()]));
///
/// let list = parse_tool_list("KEY", r#"["plex_search"]"#).unwrap();
/// assert_eq!(list, Some(vec!["plex_search".to_string()]));
///
/// assert!(parse_tool_list("KEY", "[plex_search").is_err());
/// assert_eq!(parse_tool_list("KEY", "  ").unwrap(), None);
/// ```
pub fn parse_tool_list(key: &str, value: &str) -> Result<Option<Vec<String>>, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let raw: Vec<String> = if value.starts_with('[') {
        serde_json::from_str(value).map_err(|e| ConfigError::MalformedList {
            key: key.to_string(),
            message: e.to_string(),
        })?
    } else {
        value.split(',').map(str::to_string).collect()
    };

    Ok(Some(
        raw.into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    ))
}

impl ToolFilterConfig {
    /// Apply a layer on top of this configuration, field by field.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(profile) = layer.profile.map(|p| p.trim().to_string()) {
            if !profile.is_empty() {
                self.profile = profile;
            }
        }
        if let Some(branches) = layer.additional_branches {
            self.additional_branches = branches;
        }
        if let Some(exclude) = layer.exclude_tools {
            self.exclude_tools = exclude;
        }
        if let Some(include) = layer.include_tools {
            self.include_tools = include;
        }
    }

    /// Apply a config file if it exists and parses. Otherwise log and keep
    /// the current values.
    pub fn apply_file(&mut self, path: &Path) {
        match ConfigLayer::read_file(path) {
            Ok(Some(layer)) => {
                debug!(path = %path.display(), "Loaded tool filter config file");
                self.apply(layer);
            }
            Ok(None) => {
                debug!(path = %path.display(), "Tool filter config file not found");
            }
            Err(e) => {
                warn!("{}; ignoring config file", e);
            }
        }
    }

    /// Load configuration from a file path and an environment lookup.
    ///
    /// `file` takes precedence over the path named by
    /// `MEDIA_MCP_TOOL_CONFIG`.
    pub fn load_with<F>(file: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let env_path = lookup(ENV_CONFIG_PATH).filter(|p| !p.trim().is_empty());
        match (file, env_path.as_deref()) {
            (Some(path), _) => config.apply_file(path),
            (None, Some(path)) => config.apply_file(Path::new(path.trim())),
            (None, None) => {}
        }

        config.apply(ConfigLayer::from_lookup(lookup));
        config
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::load_with(None, |key| std::env::var(key).ok())
    }
}
