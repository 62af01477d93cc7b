//! # Tool Sets
//!
//! A set of tool names. Profiles and branches resolve into one, and the
//! include/exclude overrides edit one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of tool names.
///
/// Iteration is in name order so listings are deterministic.
///
/// # Example
///
/// ```
/// use media_access::ToolSet;
///
/// let mut set = ToolSet::new();
/// set.insert("radarr_get_movies");
/// set.insert("radarr_get_movies");
/// set.insert("sonarr_get_series");
///
/// assert!(set.contains("radarr_get_movies"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSet {
    tools: BTreeSet<String>,
}

impl ToolSet {
    /// Create a new empty tool set.
    pub fn new() -> Self {
        Self {
            tools: BTreeSet::new(),
        }
    }

    /// Add a tool name. Returns `true` if it was not already present.
    pub fn insert(&mut self, tool: impl Into<String>) -> bool {
        self.tools.insert(tool.into())
    }

    /// Add several tool names.
    pub fn extend<I, S>(&mut self, tools: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tool in tools {
            self.insert(tool);
        }
    }

    /// Remove a tool name. Returns `true` if it was present.
    pub fn remove(&mut self, tool: &str) -> bool {
        self.tools.remove(tool)
    }

    /// Check if the set contains a tool.
    pub fn contains(&self, tool: &str) -> bool {
        self.tools.contains(tool)
    }

    /// Merge another tool set into this one.
    pub fn merge(&mut self, other: &ToolSet) {
        for tool in &other.tools {
            self.tools.insert(tool.clone());
        }
    }

    /// Tool names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(String::as_str).collect()
    }

    /// Iterate over tool names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str)
    }

    /// Get the count of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Check if this set contains every tool in `other`.
    pub fn contains_all(&self, other: &ToolSet) -> bool {
        other.tools.is_subset(&self.tools)
    }
}

impl<S: Into<String>> FromIterator<S> for ToolSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = ToolSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ToolSet::new();
        assert!(set.insert("plex_search"));
        assert!(!set.insert("plex_search"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set: ToolSet = ["a", "b"].into_iter().collect();
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_merge_and_contains_all() {
        let mut left: ToolSet = ["a", "b"].into_iter().collect();
        let right: ToolSet = ["b", "c"].into_iter().collect();
        left.merge(&right);

        assert_eq!(left.names(), vec!["a", "b", "c"]);
        assert!(left.contains_all(&right));
        assert!(!right.contains_all(&left));
    }
}
