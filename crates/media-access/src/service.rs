//! # Services
//!
//! Upstream services that contribute tools. Every tool name starts with its
//! service prefix (`radarr_`, `sonarr_`, `tmdb_`, `plex_`).

use serde::{Deserialize, Serialize};

/// Service that owns a tool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// Radarr: movie collection manager.
    Radarr,
    /// Sonarr: TV series collection manager.
    Sonarr,
    /// TMDB: movie and TV metadata database.
    Tmdb,
    /// Plex: media server.
    Plex,
}

impl Service {
    /// Get the string representation of the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Radarr => "radarr",
            Service::Sonarr => "sonarr",
            Service::Tmdb => "tmdb",
            Service::Plex => "plex",
        }
    }

    /// Parse service from string representation.
    ///
    /// ```
    /// use media_access::Service;
    ///
    /// assert_eq!(Service::parse("Radarr"), Some(Service::Radarr));
    /// assert_eq!(Service::parse("themoviedb"), Some(Service::Tmdb));
    /// assert_eq!(Service::parse("jellyfin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "radarr" => Some(Service::Radarr),
            "sonarr" => Some(Service::Sonarr),
            "tmdb" | "themoviedb" => Some(Service::Tmdb),
            "plex" => Some(Service::Plex),
            _ => None,
        }
    }

    /// Get all services.
    pub fn all() -> Vec<Self> {
        vec![Service::Radarr, Service::Sonarr, Service::Tmdb, Service::Plex]
    }

    /// Derive the owning service from a tool name's prefix.
    ///
    /// ```
    /// use media_access::Service;
    ///
    /// assert_eq!(Service::of_tool("sonarr_get_series"), Some(Service::Sonarr));
    /// assert_eq!(Service::of_tool("get_series"), None);
    /// ```
    pub fn of_tool(tool: &str) -> Option<Self> {
        let (prefix, _) = tool.split_once('_')?;
        match prefix {
            "radarr" => Some(Service::Radarr),
            "sonarr" => Some(Service::Sonarr),
            "tmdb" => Some(Service::Tmdb),
            "plex" => Some(Service::Plex),
            _ => None,
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for service in Service::all() {
            assert_eq!(Service::parse(service.as_str()), Some(service));
        }
    }

    #[test]
    fn test_of_tool_requires_known_prefix() {
        assert_eq!(Service::of_tool("radarr_get_movies"), Some(Service::Radarr));
        assert_eq!(Service::of_tool("plex_search"), Some(Service::Plex));
        assert_eq!(Service::of_tool("tmdb"), None);
        assert_eq!(Service::of_tool("jellyfin_search"), None);
    }
}
