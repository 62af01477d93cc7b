//! # Filter Criteria
//!
//! Per-domain criteria structs and the engine that applies them. Every present
//! constraint narrows the collection; absent keys impose nothing, so a
//! criteria value is the AND of whatever it carries.

use serde::{Deserialize, Serialize};

use crate::entity::{Movie, Series};
use crate::predicates::{
    filter_by_genres, filter_by_tags, filter_by_title, filter_by_year_range, filter_contains,
    filter_exact, filter_exact_str, filter_exact_text,
};

/// A set of constraints that can narrow a collection of `T`.
pub trait FilterCriteria<T> {
    /// Apply every present constraint, preserving input order.
    fn apply(&self, items: Vec<T>) -> Vec<T>;
}

/// Apply optional criteria to a collection.
///
/// `None` hands the input back unchanged.
///
/// # Example
///
/// ```
/// use media_query::criteria::{apply_filters, MovieFilter};
/// use media_query::entity::Movie;
///
/// let movies = vec![
///     Movie { title: "Heat".into(), year: Some(1995), ..Default::default() },
///     Movie { title: "Heat Wave".into(), year: Some(2022), ..Default::default() },
/// ];
/// let filter = MovieFilter {
///     title: Some("heat".into()),
///     year_from: Some(2000),
///     ..Default::default()
/// };
/// let hits = apply_filters(movies, Some(&filter));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Heat Wave");
/// ```
pub fn apply_filters<T, C>(items: Vec<T>, criteria: Option<&C>) -> Vec<T>
where
    C: FilterCriteria<T>,
{
    match criteria {
        Some(criteria) => criteria.apply(items),
        None => items,
    }
}

/// Constraints over Radarr movies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilter {
    /// Case-insensitive title substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Any-of genre names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    /// Inclusive lower year bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,

    /// Inclusive upper year bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_file: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_availability: Option<String>,

    /// Any-of tag ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl FilterCriteria<Movie> for MovieFilter {
    fn apply(&self, items: Vec<Movie>) -> Vec<Movie> {
        let items = filter_by_title(items, self.title.as_deref());
        let items = filter_by_genres(items, self.genres.as_deref());
        let items = filter_by_year_range(items, self.year_from, self.year_to);
        let items = filter_exact(items, self.monitored.as_ref(), |m| m.monitored);
        let items = filter_exact(items, self.has_file.as_ref(), |m| m.has_file);
        let items = filter_exact(items, self.quality_profile_id.as_ref(), |m| {
            m.quality_profile_id
        });
        let items = filter_exact_text(items, self.status.as_deref(), |m| m.status.as_deref());
        let items = filter_exact_text(items, self.minimum_availability.as_deref(), |m| {
            m.minimum_availability.as_deref()
        });
        let items = filter_by_tags(items, self.tags.as_deref());
        let items = filter_exact(items, self.tmdb_id.as_ref(), |m| m.tmdb_id);
        filter_exact_str(items, self.imdb_id.as_deref(), |m| m.imdb_id.as_deref())
    }
}

/// Constraints over Sonarr series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesFilter {
    /// Case-insensitive title substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Any-of genre names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    /// Inclusive lower year bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,

    /// Inclusive upper year bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,

    /// Case-insensitive network substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,

    /// Any-of tag ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl FilterCriteria<Series> for SeriesFilter {
    fn apply(&self, items: Vec<Series>) -> Vec<Series> {
        let items = filter_by_title(items, self.title.as_deref());
        let items = filter_by_genres(items, self.genres.as_deref());
        let items = filter_by_year_range(items, self.year_from, self.year_to);
        let items = filter_exact(items, self.monitored.as_ref(), |s| s.monitored);
        let items = filter_contains(items, self.network.as_deref(), |s| s.network.as_deref());
        let items = filter_exact(items, self.quality_profile_id.as_ref(), |s| {
            s.quality_profile_id
        });
        let items = filter_exact_text(items, self.status.as_deref(), |s| s.status.as_deref());
        let items = filter_exact_text(items, self.series_type.as_deref(), |s| {
            s.series_type.as_deref()
        });
        let items = filter_by_tags(items, self.tags.as_deref());
        let items = filter_exact(items, self.tvdb_id.as_ref(), |s| s.tvdb_id);
        let items = filter_exact(items, self.tmdb_id.as_ref(), |s| s.tmdb_id);
        filter_exact_str(items, self.imdb_id.as_deref(), |s| s.imdb_id.as_deref())
    }
}
