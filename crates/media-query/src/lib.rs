//! # Media Query
//!
//! This crate narrows, orders and pages media library collections fetched
//! from Radarr and Sonarr. Neither upstream API filters server-side, so every
//! listing tool fetches the whole library and runs it through this pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! raw collection ─► filter (criteria) ─► sort (SortSpec) ─► paginate (PageRequest) ─► PageResult
//! ```
//!
//! - **Predicates** ([`predicates`]): single-constraint filters generic over
//!   the capability traits [`Titled`], [`Yeared`], [`Genred`] and [`Tagged`].
//! - **Criteria** ([`criteria`]): [`MovieFilter`] and [`SeriesFilter`], the
//!   AND of every present constraint.
//! - **Sorting** ([`sort`]): stable single-field sort. Missing values go last
//!   in both directions; statistics aggregates default to zero.
//! - **Pagination** ([`page`]): offset/limit with `total` counted before
//!   slicing.
//! - **Query** ([`query`]): all three stages behind one deserializable type.
//!
//! ## Usage
//!
//! ```rust
//! use media_query::{paginate, sort_items, apply_filters, Movie, MovieFilter, MovieSortField, SortSpec};
//!
//! let movies = vec![
//!     Movie { id: 1, title: "Blade Runner".into(), year: Some(1982), ..Default::default() },
//!     Movie { id: 2, title: "Blade Runner 2049".into(), year: Some(2017), ..Default::default() },
//!     Movie { id: 3, title: "Arrival".into(), year: Some(2016), ..Default::default() },
//! ];
//!
//! let filter = MovieFilter { title: Some("blade".into()), ..Default::default() };
//! let movies = apply_filters(movies, Some(&filter));
//! let movies = sort_items(movies, Some(&SortSpec::desc(MovieSortField::Year)));
//! let page = paginate(movies, Some(1), None);
//!
//! assert_eq!(page.total, 2);
//! assert_eq!(page.data[0].id, 2);
//! ```
//!
//! All operations are synchronous and pure. Inputs are moved in and the
//! surviving items moved out; entities themselves are never modified.

pub mod criteria;
pub mod entity;
pub mod page;
pub mod predicates;
pub mod query;
pub mod sort;

pub use criteria::{apply_filters, FilterCriteria, MovieFilter, SeriesFilter};
pub use entity::{
    Genred, Movie, MovieStatistics, Rating, Ratings, Series, SeriesStatistics, Tagged, Titled,
    Yeared,
};
pub use page::{paginate, paginate_request, PageRequest, PageResult};
pub use query::{CollectionQuery, MovieQuery, SeriesQuery};
pub use sort::{
    sort_items, MovieSortField, SeriesSortField, SortDirection, SortExtractor, SortKey, SortSpec,
    SortValue,
};
