//! # Collection Query
//!
//! Filter, sort and paginate in one pass, in that order.

use serde::{Deserialize, Serialize};

use crate::criteria::{apply_filters, FilterCriteria, MovieFilter, SeriesFilter};
use crate::page::{paginate_request, PageRequest, PageResult};
use crate::sort::{sort_items, MovieSortField, SeriesSortField, SortDirection, SortKey, SortSpec};

/// A full collection request.
///
/// Deserializes from the flat argument shape tools receive: criteria keys,
/// `sortBy`, `sortOrder`, `limit` and `skip` side by side.
///
/// ```
/// use media_query::entity::Movie;
/// use media_query::query::MovieQuery;
///
/// let query: MovieQuery = serde_json::from_value(serde_json::json!({
///     "title": "alien",
///     "sortBy": "year",
///     "sortOrder": "desc",
///     "limit": 1
/// })).unwrap();
///
/// let movies = vec![
///     Movie { id: 1, title: "Alien".into(), year: Some(1979), ..Default::default() },
///     Movie { id: 2, title: "Aliens".into(), year: Some(1986), ..Default::default() },
/// ];
/// let page = query.run(movies);
/// assert_eq!(page.total, 2);
/// assert_eq!(page.data[0].id, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQuery<C, F> {
    #[serde(flatten)]
    pub criteria: C,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<F>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortDirection>,

    #[serde(flatten)]
    pub page: PageRequest,
}

impl<C: Default, F> Default for CollectionQuery<C, F> {
    fn default() -> Self {
        Self {
            criteria: C::default(),
            sort_by: None,
            sort_order: None,
            page: PageRequest::default(),
        }
    }
}

/// Query over Radarr movies.
pub type MovieQuery = CollectionQuery<MovieFilter, MovieSortField>;

/// Query over Sonarr series.
pub type SeriesQuery = CollectionQuery<SeriesFilter, SeriesSortField>;

impl<C, F: Copy> CollectionQuery<C, F> {
    /// The sort spec, if a field was requested.
    pub fn sort_spec(&self) -> Option<SortSpec<F>> {
        self.sort_by
            .map(|field| SortSpec::new(field, self.sort_order.unwrap_or_default()))
    }

    /// Run the query over a freshly fetched collection.
    pub fn run<T>(&self, items: Vec<T>) -> PageResult<T>
    where
        C: FilterCriteria<T>,
        F: SortKey<T>,
    {
        let items = apply_filters(items, Some(&self.criteria));
        let items = sort_items(items, self.sort_spec().as_ref());
        paginate_request(items, &self.page)
    }
}
