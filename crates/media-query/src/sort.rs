//! # Sorting
//!
//! Stable single-field sorting over entity collections.
//!
//! A sort field is resolved once into a [`SortExtractor`]: either a direct
//! accessor that may report a missing value, or an accessor into a nested
//! statistics aggregate that substitutes a default when the aggregate is
//! absent. The comparison loop itself never looks at field names.
//!
//! Missing values always sort after present ones, in both directions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Movie, Series};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A comparable field value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Text, compared case-insensitively first.
    Text(String),
    /// Any numeric value, including timestamps.
    Number(f64),
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Text(text) => f.write_str(text),
            SortValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

/// Compare two strings the way a collation would: case-folded first, then
/// by code point so distinct strings never compare equal.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl SortValue {
    /// Three-way comparison in ascending order.
    ///
    /// Text against text collates, numbers compare numerically, and mixed
    /// pairs fall back to comparing their string forms. Numbers use the IEEE
    /// total order, so NaN sorts after every other number instead of
    /// comparing equal.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (a, b) => compare_text(&a.to_string(), &b.to_string()),
        }
    }
}

/// A sort key computed once per item, with text already case-folded.
enum PreparedKey {
    Text { folded: String, raw: String },
    Number(f64),
}

impl PreparedKey {
    fn new(value: SortValue) -> Self {
        match value {
            SortValue::Text(raw) => PreparedKey::Text {
                folded: raw.to_lowercase(),
                raw,
            },
            SortValue::Number(number) => PreparedKey::Number(number),
        }
    }

    /// Re-key a number by its string form.
    fn into_text(self) -> Self {
        match self {
            PreparedKey::Number(number) => PreparedKey::new(SortValue::Text(number.to_string())),
            text => text,
        }
    }

    fn compare(&self, other: &PreparedKey) -> Ordering {
        match (self, other) {
            (
                PreparedKey::Text { folded: a, raw: raw_a },
                PreparedKey::Text { folded: b, raw: raw_b },
            ) => a.cmp(b).then_with(|| raw_a.cmp(raw_b)),
            (PreparedKey::Number(a), PreparedKey::Number(b)) => a.total_cmp(b),
            // Unreachable from sort_items, which unifies kinds first.
            (PreparedKey::Number(_), PreparedKey::Text { .. }) => Ordering::Less,
            (PreparedKey::Text { .. }, PreparedKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// How to read the sort key out of an entity.
pub enum SortExtractor<T> {
    /// A first-class field; `None` means the value is missing.
    Direct(fn(&T) -> Option<SortValue>),
    /// A value inside a nested aggregate; `None` is replaced by `default`.
    Aggregate {
        read: fn(&T) -> Option<f64>,
        default: f64,
    },
}

impl<T> SortExtractor<T> {
    /// Read the key from `item`. Aggregates are never missing.
    pub fn key(&self, item: &T) -> Option<SortValue> {
        match self {
            SortExtractor::Direct(read) => read(item),
            SortExtractor::Aggregate { read, default } => {
                Some(SortValue::Number(read(item).unwrap_or(*default)))
            }
        }
    }
}

/// A field enum that knows how to extract its key from `T`.
pub trait SortKey<T> {
    /// Resolve the field into an extractor.
    fn extractor(&self) -> SortExtractor<T>;
}

/// Which field to sort by and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<F> {
    /// Field to sort by.
    pub field: F,
    /// Direction, ascending unless stated.
    #[serde(default)]
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    /// Create a sort spec.
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Sort a collection by an optional spec.
///
/// Without a spec the input comes back in its original order. The sort is
/// stable: items with equal keys keep their relative input order.
///
/// # Example
///
/// ```
/// use media_query::entity::Movie;
/// use media_query::sort::{sort_items, MovieSortField, SortSpec};
///
/// let movies = vec![
///     Movie { id: 1, year: Some(2020), ..Default::default() },
///     Movie { id: 2, year: Some(1999), ..Default::default() },
///     Movie { id: 3, year: Some(2020), ..Default::default() },
/// ];
/// let sorted = sort_items(movies, Some(&SortSpec::desc(MovieSortField::Year)));
/// let ids: Vec<_> = sorted.iter().map(|m| m.id).collect();
/// assert_eq!(ids, vec![1, 3, 2]);
/// ```
pub fn sort_items<T, F>(items: Vec<T>, spec: Option<&SortSpec<F>>) -> Vec<T>
where
    F: SortKey<T>,
{
    let Some(spec) = spec else {
        return items;
    };
    let extractor = spec.field.extractor();
    let direction = spec.direction;

    let mut keyed: Vec<(Option<PreparedKey>, T)> = items
        .into_iter()
        .map(|item| (extractor.key(&item).map(PreparedKey::new), item))
        .collect();

    let has_text = keyed
        .iter()
        .any(|(key, _)| matches!(key, Some(PreparedKey::Text { .. })));
    let has_number = keyed
        .iter()
        .any(|(key, _)| matches!(key, Some(PreparedKey::Number(_))));
    if has_text && has_number {
        for (key, _) in keyed.iter_mut() {
            *key = key.take().map(PreparedKey::into_text);
        }
    }

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.compare(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}

fn timestamp(added: Option<chrono::DateTime<chrono::Utc>>) -> Option<SortValue> {
    added.map(|at| SortValue::Number(at.timestamp_millis() as f64))
}

/// Sortable movie fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieSortField {
    Title,
    SortTitle,
    Year,
    Added,
    Runtime,
    Rating,
    /// Read from `statistics.sizeOnDisk`.
    SizeOnDisk,
}

impl SortKey<Movie> for MovieSortField {
    fn extractor(&self) -> SortExtractor<Movie> {
        match self {
            MovieSortField::Title => SortExtractor::Direct(|m| Some(m.title.as_str().into())),
            MovieSortField::SortTitle => {
                SortExtractor::Direct(|m| m.sort_title.as_deref().map(SortValue::from))
            }
            MovieSortField::Year => SortExtractor::Direct(|m| m.year.map(|y| f64::from(y).into())),
            MovieSortField::Added => SortExtractor::Direct(|m| timestamp(m.added)),
            MovieSortField::Runtime => {
                SortExtractor::Direct(|m| m.runtime.map(|r| f64::from(r).into()))
            }
            MovieSortField::Rating => SortExtractor::Direct(|m| {
                m.ratings
                    .as_ref()
                    .and_then(|r| r.primary())
                    .map(SortValue::Number)
            }),
            MovieSortField::SizeOnDisk => SortExtractor::Aggregate {
                read: |m| {
                    m.statistics
                        .as_ref()
                        .and_then(|s| s.size_on_disk)
                        .map(|size| size as f64)
                },
                default: 0.0,
            },
        }
    }
}

/// Sortable series fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesSortField {
    Title,
    SortTitle,
    Year,
    Added,
    Runtime,
    Network,
    /// Read from `statistics.sizeOnDisk`.
    SizeOnDisk,
    /// Read from `statistics.episodeCount`.
    EpisodeCount,
    /// Read from `statistics.seasonCount`.
    SeasonCount,
    /// Read from `statistics.percentOfEpisodes`.
    PercentOfEpisodes,
}

impl SortKey<Series> for SeriesSortField {
    fn extractor(&self) -> SortExtractor<Series> {
        match self {
            SeriesSortField::Title => SortExtractor::Direct(|s| Some(s.title.as_str().into())),
            SeriesSortField::SortTitle => {
                SortExtractor::Direct(|s| s.sort_title.as_deref().map(SortValue::from))
            }
            SeriesSortField::Year => {
                SortExtractor::Direct(|s| s.year.map(|y| f64::from(y).into()))
            }
            SeriesSortField::Added => SortExtractor::Direct(|s| timestamp(s.added)),
            SeriesSortField::Runtime => {
                SortExtractor::Direct(|s| s.runtime.map(|r| f64::from(r).into()))
            }
            SeriesSortField::Network => {
                SortExtractor::Direct(|s| s.network.as_deref().map(SortValue::from))
            }
            SeriesSortField::SizeOnDisk => SortExtractor::Aggregate {
                read: |s| {
                    s.statistics
                        .as_ref()
                        .and_then(|st| st.size_on_disk)
                        .map(|size| size as f64)
                },
                default: 0.0,
            },
            SeriesSortField::EpisodeCount => SortExtractor::Aggregate {
                read: |s| {
                    s.statistics
                        .as_ref()
                        .and_then(|st| st.episode_count)
                        .map(f64::from)
                },
                default: 0.0,
            },
            SeriesSortField::SeasonCount => SortExtractor::Aggregate {
                read: |s| {
                    s.statistics
                        .as_ref()
                        .and_then(|st| st.season_count)
                        .map(f64::from)
                },
                default: 0.0,
            },
            SeriesSortField::PercentOfEpisodes => SortExtractor::Aggregate {
                read: |s| s.statistics.as_ref().and_then(|st| st.percent_of_episodes),
                default: 0.0,
            },
        }
    }
}
