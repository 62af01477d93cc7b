//! # Entities
//!
//! Movie and series records as returned by Radarr and Sonarr, plus the
//! capability traits the filter predicates are generic over.
//!
//! Only the attributes that filtering and sorting look at are typed. Every
//! other upstream attribute is kept in a flattened `extra` map so a record
//! serializes back out exactly as it came in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entity with a display title.
pub trait Titled {
    /// The title matched by title filters.
    fn title(&self) -> &str;
}

/// An entity with a release year.
pub trait Yeared {
    /// Release year, `None` when upstream has not assigned one.
    fn year(&self) -> Option<i32>;
}

/// An entity tagged with genre names.
pub trait Genred {
    /// Genre names; empty when the entity has none.
    fn genres(&self) -> &[String];
}

/// An entity carrying upstream tag ids.
pub trait Tagged {
    /// Tag ids; empty when the entity has none.
    fn tags(&self) -> &[i64];
}

/// Movie statistics aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStatistics {
    /// Bytes on disk across all movie files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_on_disk: Option<u64>,

    /// Number of movie files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_file_count: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Series statistics aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatistics {
    /// Bytes on disk across all episode files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_on_disk: Option<u64>,

    /// Monitored episodes that have aired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,

    /// Episodes with a file on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_file_count: Option<u32>,

    /// All known episodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_episode_count: Option<u32>,

    /// Number of seasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_count: Option<u32>,

    /// Percentage of monitored episodes on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_episodes: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single rating source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub value: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ratings keyed by source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<Rating>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ratings {
    /// The rating used for sorting: IMDb first, then TMDB.
    pub fn primary(&self) -> Option<f64> {
        self.imdb
            .as_ref()
            .or(self.tmdb.as_ref())
            .map(|rating| rating.value)
    }
}

/// A movie from Radarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub tags: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_file: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i64>,

    /// Release status (`announced`, `inCinemas`, `released`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_availability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    /// Runtime in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<MovieStatistics>,

    /// Upstream attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A series from Sonarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub tags: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,

    /// Original network, e.g. `HBO` or `BBC One`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i64>,

    /// `continuing`, `ended`, `upcoming` or `deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// `standard`, `daily` or `anime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    /// Typical episode runtime in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SeriesStatistics>,

    /// Upstream attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Titled for Movie {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Yeared for Movie {
    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl Genred for Movie {
    fn genres(&self) -> &[String] {
        &self.genres
    }
}

impl Tagged for Movie {
    fn tags(&self) -> &[i64] {
        &self.tags
    }
}

impl Titled for Series {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Yeared for Series {
    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl Genred for Series {
    fn genres(&self) -> &[String] {
        &self.genres
    }
}

impl Tagged for Series {
    fn tags(&self) -> &[i64] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_keeps_unknown_fields() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Heat",
            "year": 1995,
            "genres": ["Crime", "Drama"],
            "hasFile": true,
            "path": "/movies/Heat (1995)",
            "statistics": { "sizeOnDisk": 1024, "releaseGroups": ["x"] }
        });

        let movie: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.has_file, Some(true));
        assert_eq!(movie.extra.get("path"), Some(&Value::from("/movies/Heat (1995)")));

        let stats = movie.statistics.as_ref().unwrap();
        assert_eq!(stats.size_on_disk, Some(1024));
        assert!(stats.extra.contains_key("releaseGroups"));

        let out = serde_json::to_value(&movie).unwrap();
        assert_eq!(out["path"], "/movies/Heat (1995)");
        assert_eq!(out["hasFile"], true);
    }

    #[test]
    fn test_series_missing_collections_default_empty() {
        let series: Series = serde_json::from_value(serde_json::json!({
            "title": "The Wire",
            "network": "HBO"
        }))
        .unwrap();

        assert!(series.genres.is_empty());
        assert!(series.tags.is_empty());
        assert_eq!(series.year, None);
        assert_eq!(series.network.as_deref(), Some("HBO"));
    }

    #[test]
    fn test_ratings_primary_prefers_imdb() {
        let ratings = Ratings {
            imdb: Some(Rating { votes: 10, value: 8.1, ..Default::default() }),
            tmdb: Some(Rating { votes: 10, value: 7.0, ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(ratings.primary(), Some(8.1));

        let tmdb_only = Ratings {
            tmdb: Some(Rating { votes: 3, value: 6.5, ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(tmdb_only.primary(), Some(6.5));
        assert_eq!(Ratings::default().primary(), None);
    }
}
