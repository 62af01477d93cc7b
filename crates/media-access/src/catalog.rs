//! # Tool Catalog
//!
//! Branches group tool names by theme; profiles are curated unions of
//! branches. The catalog answers which tools a profile or branch list expands
//! to.
//!
//! Profile lookups are strict and fail on unknown names. Branch lookups are
//! lenient and skip unknown names, so a branch list may mention branches a
//! deployment does not ship.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CatalogError, ProfileError, ProfileResult};
use crate::service::Service;
use crate::toolset::ToolSet;

/// A named group of tools sharing a functional theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolBranch {
    /// Unique branch name, e.g. `library-management`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Tools in this branch.
    pub tools: ToolSet,
}

impl ToolBranch {
    /// Create a branch.
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            tools: tools.into_iter().collect(),
        }
    }
}

/// A named, curated selection of branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Unique profile name, e.g. `default`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Branch names, in presentation order.
    pub branches: Vec<String>,
}

impl ToolProfile {
    /// Create a profile.
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            branches: branches.into_iter().map(Into::into).collect(),
        }
    }
}

/// Registry of branches and profiles.
///
/// # Example
///
/// ```
/// use media_access::ToolCatalog;
///
/// let catalog = ToolCatalog::builtin();
/// let tools = catalog.resolve_profile("minimal").unwrap();
/// assert!(tools.contains("radarr_get_movies"));
/// assert!(catalog.resolve_profile("nonexistent").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCatalog {
    branches: Vec<ToolBranch>,
    profiles: Vec<ToolProfile>,
}

impl ToolCatalog {
    /// Build a catalog, rejecting duplicate names.
    ///
    /// Branch and profile names share one namespace: a profile may not reuse
    /// a branch name.
    pub fn new(branches: Vec<ToolBranch>, profiles: Vec<ToolProfile>) -> Result<Self, CatalogError> {
        let mut branch_names = HashSet::new();
        for branch in &branches {
            if !branch_names.insert(branch.name.as_str()) {
                return Err(CatalogError::DuplicateBranch(branch.name.clone()));
            }
        }

        let mut profile_names = HashSet::new();
        for profile in &profiles {
            if branch_names.contains(profile.name.as_str()) {
                return Err(CatalogError::NameCollision(profile.name.clone()));
            }
            if !profile_names.insert(profile.name.as_str()) {
                return Err(CatalogError::DuplicateProfile(profile.name.clone()));
            }
        }

        Ok(Self::from_parts(branches, profiles))
    }

    /// Build without validation. Used for the static built-in tables, which
    /// are checked by tests.
    pub(crate) fn from_parts(branches: Vec<ToolBranch>, profiles: Vec<ToolProfile>) -> Self {
        Self { branches, profiles }
    }

    /// All branches in declaration order.
    pub fn branches(&self) -> &[ToolBranch] {
        &self.branches
    }

    /// All profiles in declaration order.
    pub fn profiles(&self) -> &[ToolProfile] {
        &self.profiles
    }

    /// Look up a branch by name.
    pub fn branch(&self, name: &str) -> Option<&ToolBranch> {
        self.branches.iter().find(|branch| branch.name == name)
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ToolProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Check if a profile is registered.
    pub fn has_profile(&self, name: &str) -> bool {
        self.profile(name).is_some()
    }

    /// Names of the branches that contain `tool`, in declaration order.
    pub fn branches_of(&self, tool: &str) -> Vec<&str> {
        self.branches
            .iter()
            .filter(|branch| branch.tools.contains(tool))
            .map(|branch| branch.name.as_str())
            .collect()
    }

    /// Check if any branch contains `tool`.
    pub fn contains_tool(&self, tool: &str) -> bool {
        self.branches.iter().any(|branch| branch.tools.contains(tool))
    }

    /// Every tool named by any branch.
    pub fn all_tools(&self) -> ToolSet {
        let mut all = ToolSet::new();
        for branch in &self.branches {
            all.merge(&branch.tools);
        }
        all
    }

    /// Every tool owned by `service`.
    pub fn tools_for_service(&self, service: Service) -> ToolSet {
        self.all_tools()
            .iter()
            .filter(|tool| Service::of_tool(tool) == Some(service))
            .collect()
    }

    /// Expand a profile into the union of its branches' tools.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnknownProfile`] if no profile has this name.
    pub fn resolve_profile(&self, name: &str) -> ProfileResult<ToolSet> {
        let profile = self
            .profile(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))?;
        Ok(self.resolve_branches(profile.branches.as_slice()))
    }

    /// Expand branch names into the union of their tools.
    ///
    /// Unknown branch names are skipped without error.
    pub fn resolve_branches<S: AsRef<str>>(&self, names: &[S]) -> ToolSet {
        let mut tools = ToolSet::new();
        for name in names {
            if let Some(branch) = self.branch(name.as_ref()) {
                tools.merge(&branch.tools);
            }
        }
        tools
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_catalog() -> ToolCatalog {
        ToolCatalog::new(
            vec![
                ToolBranch::new("browse", "Browse", ["radarr_get_movies", "sonarr_get_series"]),
                ToolBranch::new("manage", "Manage", ["radarr_add_movie", "radarr_get_movies"]),
            ],
            vec![
                ToolProfile::new("default", "Default", ["browse"]),
                ToolProfile::new("full", "Everything", ["browse", "manage"]),
                ToolProfile::new("stale", "Mentions a removed branch", ["browse", "gone"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_profile_unions_branches() {
        let tools = small_catalog().resolve_profile("full").unwrap();
        assert_eq!(
            tools.names(),
            vec!["radarr_add_movie", "radarr_get_movies", "sonarr_get_series"]
        );
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let err = small_catalog().resolve_profile("admin").unwrap_err();
        assert_eq!(err, ProfileError::UnknownProfile("admin".to_string()));
    }

    #[test]
    fn test_unknown_branches_are_skipped() {
        let catalog = small_catalog();
        let tools = catalog.resolve_branches(&["manage", "does-not-exist"][..]);
        assert_eq!(tools.names(), vec!["radarr_add_movie", "radarr_get_movies"]);

        let stale = catalog.resolve_profile("stale").unwrap();
        assert_eq!(stale, catalog.resolve_profile("default").unwrap());
    }

    #[test]
    fn test_branches_of_tool() {
        let catalog = small_catalog();
        assert_eq!(catalog.branches_of("radarr_get_movies"), vec!["browse", "manage"]);
        assert!(catalog.branches_of("plex_search").is_empty());
        assert!(!catalog.contains_tool("plex_search"));
    }

    #[test]
    fn test_tools_for_service() {
        let catalog = small_catalog();
        let radarr = catalog.tools_for_service(Service::Radarr);
        assert_eq!(radarr.names(), vec!["radarr_add_movie", "radarr_get_movies"]);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let dup_branch = ToolCatalog::new(
            vec![
                ToolBranch::new("a", "", ["x"]),
                ToolBranch::new("a", "", ["y"]),
            ],
            vec![],
        );
        assert_eq!(dup_branch.unwrap_err(), CatalogError::DuplicateBranch("a".into()));

        let collision = ToolCatalog::new(
            vec![ToolBranch::new("a", "", ["x"])],
            vec![ToolProfile::new("a", "", ["a"])],
        );
        assert_eq!(collision.unwrap_err(), CatalogError::NameCollision("a".into()));

        let dup_profile = ToolCatalog::new(
            vec![],
            vec![
                ToolProfile::new("p", "", Vec::<String>::new()),
                ToolProfile::new("p", "", Vec::<String>::new()),
            ],
        );
        assert_eq!(dup_profile.unwrap_err(), CatalogError::DuplicateProfile("p".into()));
    }
}
