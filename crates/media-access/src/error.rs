//! Error types for tool access resolution
//!
//! Unknown profiles and catalog inconsistencies are hard errors here. The
//! configuration layer decides which of them to downgrade to warnings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving profiles against a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile with this name is registered
    #[error("Unknown tool profile: {0}")]
    UnknownProfile(String),
}

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two branches share a name
    #[error("Duplicate branch: {0}")]
    DuplicateBranch(String),

    /// Two profiles share a name
    #[error("Duplicate profile: {0}")]
    DuplicateProfile(String),

    /// A profile reuses a branch name
    #[error("Profile name collides with branch: {0}")]
    NameCollision(String),
}

/// Errors raised while reading tool filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON of the expected shape
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Environment list value is not a valid list
    #[error("Malformed tool list in {key}: {message}")]
    MalformedList {
        /// Environment variable name.
        key: String,
        /// What was wrong with the value.
        message: String,
    },
}

/// Result type for profile resolution.
pub type ProfileResult<T> = Result<T, ProfileError>;
