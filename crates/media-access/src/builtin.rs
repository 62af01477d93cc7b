//! # Built-in Catalog
//!
//! The branches and profiles shipped with the server.
//!
//! ## Branches
//!
//! | Branch               | Theme                                           |
//! |----------------------|-------------------------------------------------|
//! | `library-browsing`   | Read the Radarr/Sonarr libraries                |
//! | `library-management` | Add, edit, delete and search library entries    |
//! | `discovery`          | Find new titles (lookups, TMDB search/trending) |
//! | `metadata`           | TMDB detail pages                               |
//! | `downloads`          | Download queues and history                     |
//! | `calendar`           | Upcoming releases and airings                   |
//! | `media-server`       | Plex libraries, playback and activity           |
//! | `configuration`      | Quality profiles, root folders, tags            |
//! | `system`             | Service health and version                      |
//!
//! ## Profiles
//!
//! - `minimal`: library browsing only
//! - `default`: browsing, discovery, metadata, calendar, system
//! - `readonly`: every branch that never changes upstream state
//! - `full`: every branch

use crate::catalog::{ToolBranch, ToolCatalog, ToolProfile};

/// Profile used when the configured profile does not exist.
pub const DEFAULT_PROFILE: &str = "default";

const LIBRARY_BROWSING: &[&str] = &[
    "radarr_get_movies",
    "radarr_get_movie",
    "radarr_get_movie_files",
    "sonarr_get_series",
    "sonarr_get_series_by_id",
    "sonarr_get_episodes",
];

const LIBRARY_MANAGEMENT: &[&str] = &[
    "radarr_add_movie",
    "radarr_update_movie",
    "radarr_delete_movie",
    "radarr_search_movie",
    "sonarr_add_series",
    "sonarr_update_series",
    "sonarr_delete_series",
    "sonarr_search_series",
];

const DISCOVERY: &[&str] = &[
    "radarr_lookup_movie",
    "sonarr_lookup_series",
    "tmdb_search_movies",
    "tmdb_search_tv",
    "tmdb_get_trending",
    "tmdb_discover_movies",
    "tmdb_discover_tv",
    "tmdb_get_recommendations",
];

const METADATA: &[&str] = &[
    "tmdb_get_movie_details",
    "tmdb_get_tv_details",
    "tmdb_get_person",
    "tmdb_get_recommendations",
];

const DOWNLOADS: &[&str] = &[
    "radarr_get_queue",
    "radarr_get_history",
    "sonarr_get_queue",
    "sonarr_get_history",
];

const CALENDAR: &[&str] = &["radarr_get_calendar", "sonarr_get_calendar"];

const MEDIA_SERVER: &[&str] = &[
    "plex_get_libraries",
    "plex_get_library_items",
    "plex_search",
    "plex_get_metadata",
    "plex_get_recently_added",
    "plex_get_on_deck",
    "plex_get_sessions",
];

const CONFIGURATION: &[&str] = &[
    "radarr_get_quality_profiles",
    "radarr_get_root_folders",
    "radarr_get_tags",
    "sonarr_get_quality_profiles",
    "sonarr_get_root_folders",
    "sonarr_get_tags",
];

const SYSTEM: &[&str] = &[
    "radarr_get_system_status",
    "sonarr_get_system_status",
    "plex_get_server_info",
];

fn builtin_branches() -> Vec<ToolBranch> {
    vec![
        ToolBranch::new(
            "library-browsing",
            "Browse movies and series already in the Radarr and Sonarr libraries",
            LIBRARY_BROWSING.iter().copied(),
        ),
        ToolBranch::new(
            "library-management",
            "Add, update, delete and trigger searches for library entries",
            LIBRARY_MANAGEMENT.iter().copied(),
        ),
        ToolBranch::new(
            "discovery",
            "Find new movies and shows through lookups, TMDB search and trending lists",
            DISCOVERY.iter().copied(),
        ),
        ToolBranch::new(
            "metadata",
            "Detailed TMDB metadata for movies, shows and people",
            METADATA.iter().copied(),
        ),
        ToolBranch::new(
            "downloads",
            "Download queues and grab/import history",
            DOWNLOADS.iter().copied(),
        ),
        ToolBranch::new(
            "calendar",
            "Upcoming movie releases and episode airings",
            CALENDAR.iter().copied(),
        ),
        ToolBranch::new(
            "media-server",
            "Plex libraries, metadata, on-deck items and active sessions",
            MEDIA_SERVER.iter().copied(),
        ),
        ToolBranch::new(
            "configuration",
            "Quality profiles, root folders and tags",
            CONFIGURATION.iter().copied(),
        ),
        ToolBranch::new(
            "system",
            "Service status and version information",
            SYSTEM.iter().copied(),
        ),
    ]
}

fn builtin_profiles() -> Vec<ToolProfile> {
    vec![
        ToolProfile::new(
            "minimal",
            "Library browsing only",
            ["library-browsing"],
        ),
        ToolProfile::new(
            DEFAULT_PROFILE,
            "Browsing, discovery and metadata without write access",
            ["library-browsing", "discovery", "metadata", "calendar", "system"],
        ),
        ToolProfile::new(
            "readonly",
            "Every tool that does not change upstream state",
            [
                "library-browsing",
                "discovery",
                "metadata",
                "downloads",
                "calendar",
                "media-server",
                "configuration",
                "system",
            ],
        ),
        ToolProfile::new(
            "full",
            "Every available tool",
            [
                "library-browsing",
                "library-management",
                "discovery",
                "metadata",
                "downloads",
                "calendar",
                "media-server",
                "configuration",
                "system",
            ],
        ),
    ]
}

impl ToolCatalog {
    /// The catalog shipped with the server.
    pub fn builtin() -> Self {
        Self::from_parts(builtin_branches(), builtin_profiles())
    }
}
