//! # Tool Filter
//!
//! Resolves a [`ToolFilterConfig`] against a [`ToolCatalog`] into the final
//! set of enabled tools:
//!
//! ```text
//! enabled = profile ∪ additionalBranches
//! enabled = enabled \ excludeTools
//! enabled = enabled ∪ includeTools
//! ```
//!
//! Inclusion runs last, so a tool named in both `excludeTools` and
//! `includeTools` is enabled. The set is computed once; [`ToolFilter::is_enabled`]
//! is a read-only lookup.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::builtin::DEFAULT_PROFILE;
use crate::catalog::ToolCatalog;
use crate::config::ToolFilterConfig;
use crate::toolset::ToolSet;

/// The resolved set of tools a deployment exposes.
///
/// # Example
///
/// ```
/// use media_access::{ToolCatalog, ToolFilter, ToolFilterConfig};
///
/// let config = ToolFilterConfig {
///     exclude_tools: vec!["tmdb_get_person".into()],
///     include_tools: vec!["plex_search".into()],
///     ..Default::default()
/// };
/// let filter = ToolFilter::resolve(&ToolCatalog::builtin(), &config);
///
/// assert!(filter.is_enabled("radarr_get_movies"));
/// assert!(filter.is_enabled("plex_search"));
/// assert!(!filter.is_enabled("tmdb_get_person"));
/// assert!(!filter.is_enabled("radarr_delete_movie"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFilter {
    profile: String,
    enabled: ToolSet,
}

impl ToolFilter {
    /// Resolve a configuration against a catalog.
    ///
    /// An unknown profile is replaced by `default` with a warning. This never
    /// fails.
    pub fn resolve(catalog: &ToolCatalog, config: &ToolFilterConfig) -> Self {
        let (profile, mut enabled) = match catalog.resolve_profile(&config.profile) {
            Ok(tools) => (config.profile.clone(), tools),
            Err(e) => {
                warn!("{}; falling back to '{}'", e, DEFAULT_PROFILE);
                match catalog.resolve_profile(DEFAULT_PROFILE) {
                    Ok(tools) => (DEFAULT_PROFILE.to_string(), tools),
                    Err(e) => {
                        error!("{}; no tools enabled by profile", e);
                        (DEFAULT_PROFILE.to_string(), ToolSet::new())
                    }
                }
            }
        };

        for branch in &config.additional_branches {
            if catalog.branch(branch).is_none() {
                debug!(branch = %branch, "Skipping unknown branch");
            }
        }
        enabled.merge(&catalog.resolve_branches(config.additional_branches.as_slice()));

        for tool in &config.exclude_tools {
            enabled.remove(tool);
        }

        for tool in &config.include_tools {
            if !catalog.contains_tool(tool) {
                debug!(tool = %tool, "Including tool not listed in any branch");
            }
            enabled.insert(tool.as_str());
        }

        info!(
            profile = %profile,
            enabled = enabled.len(),
            "Resolved tool filter"
        );

        Self { profile, enabled }
    }

    /// Resolve a configuration against the built-in catalog.
    pub fn from_config(config: &ToolFilterConfig) -> Self {
        Self::resolve(&ToolCatalog::builtin(), config)
    }

    /// Filter that enables exactly the given tools.
    pub fn from_tools<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            profile: String::new(),
            enabled: tools.into_iter().collect(),
        }
    }

    /// Filter that enables every tool in the catalog.
    pub fn allow_all(catalog: &ToolCatalog) -> Self {
        Self {
            profile: String::new(),
            enabled: catalog.all_tools(),
        }
    }

    /// Check if a tool is enabled.
    pub fn is_enabled(&self, tool: &str) -> bool {
        self.enabled.contains(tool)
    }

    /// The profile the set was built from, after fallback.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Every enabled tool.
    pub fn enabled_tools(&self) -> &ToolSet {
        &self.enabled
    }
}

impl Default for ToolFilter {
    fn default() -> Self {
        Self::from_config(&ToolFilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ToolBranch, ToolProfile};
    use pretty_assertions::assert_eq;

    fn config(profile: &str) -> ToolFilterConfig {
        ToolFilterConfig {
            profile: profile.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_only() {
        let catalog = ToolCatalog::builtin();
        let filter = ToolFilter::resolve(&catalog, &config("minimal"));
        assert_eq!(filter.enabled_tools(), &catalog.resolve_profile("minimal").unwrap());
        assert_eq!(filter.profile(), "minimal");
    }

    #[test]
    fn test_additional_branches_are_added() {
        let cfg = ToolFilterConfig {
            profile: "minimal".into(),
            additional_branches: vec!["media-server".into(), "no-such-branch".into()],
            ..Default::default()
        };
        let filter = ToolFilter::from_config(&cfg);
        assert!(filter.is_enabled("radarr_get_movies"));
        assert!(filter.is_enabled("plex_get_sessions"));
        assert!(!filter.is_enabled("tmdb_search_movies"));
    }

    #[test]
    fn test_include_beats_exclude() {
        let cfg = ToolFilterConfig {
            exclude_tools: vec!["radarr_get_movies".into()],
            include_tools: vec!["radarr_get_movies".into()],
            ..Default::default()
        };
        assert!(ToolFilter::from_config(&cfg).is_enabled("radarr_get_movies"));
    }

    #[test]
    fn test_exclude_removes_branch_tools() {
        let cfg = ToolFilterConfig {
            profile: "full".into(),
            exclude_tools: vec!["radarr_delete_movie".into(), "sonarr_delete_series".into()],
            ..Default::default()
        };
        let filter = ToolFilter::from_config(&cfg);
        assert!(!filter.is_enabled("radarr_delete_movie"));
        assert!(!filter.is_enabled("sonarr_delete_series"));
        assert!(filter.is_enabled("radarr_add_movie"));
    }

    #[test]
    fn test_exclude_removes_from_every_branch() {
        let cfg = ToolFilterConfig {
            additional_branches: vec!["metadata".into()],
            exclude_tools: vec!["tmdb_get_recommendations".into()],
            ..Default::default()
        };
        assert!(!ToolFilter::from_config(&cfg).is_enabled("tmdb_get_recommendations"));
    }

    #[test_log::test]
    fn test_unknown_profile_falls_back_to_default() {
        let fallback = ToolFilter::from_config(&config("superuser"));
        let default = ToolFilter::from_config(&config("default"));
        assert_eq!(fallback, default);
        assert_eq!(fallback.profile(), "default");
    }

    #[test_log::test]
    fn test_missing_default_profile_enables_nothing() {
        let catalog = ToolCatalog::new(
            vec![ToolBranch::new("browse", "", ["radarr_get_movies"])],
            vec![ToolProfile::new("only", "", ["browse"])],
        )
        .unwrap();

        let cfg = ToolFilterConfig {
            profile: "missing".into(),
            include_tools: vec!["plex_search".into()],
            ..Default::default()
        };
        let filter = ToolFilter::resolve(&catalog, &cfg);
        assert_eq!(filter.enabled_tools().names(), vec!["plex_search"]);
    }

    #[test]
    fn test_allow_all_and_from_tools() {
        let catalog = ToolCatalog::builtin();
        let all = ToolFilter::allow_all(&catalog);
        assert_eq!(all.enabled_tools().len(), catalog.all_tools().len());

        let some = ToolFilter::from_tools(["plex_search"]);
        assert!(some.is_enabled("plex_search"));
        assert!(!some.is_enabled("radarr_get_movies"));
    }
}
