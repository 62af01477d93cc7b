//! Library listing tools
//!
//! `radarr_get_movies` and `sonarr_get_series` fetch the whole library from
//! a [`CollectionSource`] and narrow, order and page it with a
//! [`CollectionQuery`]. Neither upstream filters server-side, so the query
//! always runs locally.

use crate::server::{McpServerError, McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use media_access::Service;
use media_query::{CollectionQuery, FilterCriteria, Movie, MovieQuery, Series, SeriesQuery, SortKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Errors a collection source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Upstream could not be reached
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Upstream answered with an error status
    #[error("Upstream returned {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Error body or reason.
        message: String,
    },

    /// Upstream payload did not match the entity shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Supplies the full, unfiltered collection for a listing tool.
///
/// Implemented by the upstream API clients. `Vec<T>` implements it for
/// fixed collections.
#[async_trait]
pub trait CollectionSource<T>: Send + Sync {
    /// Fetch every entity.
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError>;
}

#[async_trait]
impl<T> CollectionSource<T> for Vec<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError> {
        Ok(self.clone())
    }
}

/// Parse tool arguments into a query. Missing arguments mean "everything".
fn parse_query<Q: DeserializeOwned>(args: serde_json::Value) -> McpServerResult<Q> {
    let args = if args.is_null() {
        serde_json::json!({})
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpServerError::InvalidParams(e.to_string()))
}

/// Fetch the collection, run the query and serialize the page.
async fn run_query<T, C, F>(
    source: &dyn CollectionSource<T>,
    query: &CollectionQuery<C, F>,
    noun: &str,
) -> McpServerResult<ToolResult>
where
    T: Serialize,
    C: FilterCriteria<T>,
    F: Copy + SortKey<T>,
{
    let items = match source.fetch_all().await {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to fetch {}: {}", noun, e);
            return Ok(ToolResult::error(format!("Failed to fetch {}: {}", noun, e)));
        }
    };

    debug!(fetched = items.len(), "Running {} query", noun);
    let page = query.run(items);
    let value = serde_json::to_value(&page).map_err(|e| McpServerError::Internal(e.to_string()))?;
    Ok(ToolResult::json(value))
}

fn pagination_properties() -> serde_json::Value {
    serde_json::json!({
        "sortOrder": {
            "type": "string",
            "enum": ["asc", "desc"],
            "description": "Sort direction, ascending when omitted",
            "default": "asc"
        },
        "limit": {
            "type": "integer",
            "minimum": 0,
            "description": "Maximum number of results to return"
        },
        "skip": {
            "type": "integer",
            "description": "Number of results to skip; negative values count as 0",
            "default": 0
        }
    })
}

fn common_properties() -> serde_json::Value {
    serde_json::json!({
        "title": {
            "type": "string",
            "description": "Case-insensitive title substring"
        },
        "genres": {
            "type": "array",
            "items": {"type": "string"},
            "description": "Match entries with any of these genres"
        },
        "yearFrom": {
            "type": "integer",
            "description": "Earliest year, inclusive"
        },
        "yearTo": {
            "type": "integer",
            "description": "Latest year, inclusive"
        },
        "monitored": {"type": "boolean"},
        "qualityProfileId": {"type": "integer"},
        "status": {"type": "string"},
        "tags": {
            "type": "array",
            "items": {"type": "integer"},
            "description": "Match entries with any of these tag ids"
        },
        "tmdbId": {"type": "integer"},
        "imdbId": {"type": "string"}
    })
}

fn object_schema(parts: &[serde_json::Value]) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for part in parts {
        if let Some(map) = part.as_object() {
            properties.extend(map.clone());
        }
    }
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": []
    })
}

/// Tool to list Radarr movies.
pub struct ListMoviesTool {
    source: Arc<dyn CollectionSource<Movie>>,
}

impl ListMoviesTool {
    /// Create the tool over a movie source.
    pub fn new(source: Arc<dyn CollectionSource<Movie>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for ListMoviesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "radarr_get_movies",
            "List movies in the Radarr library with optional filtering, sorting and pagination",
        )
        .with_service(Service::Radarr)
        .with_category("library")
        .with_schema(object_schema(&[
            common_properties(),
            serde_json::json!({
                "hasFile": {"type": "boolean"},
                "minimumAvailability": {"type": "string"},
                "sortBy": {
                    "type": "string",
                    "enum": ["title", "sortTitle", "year", "added", "runtime", "rating", "sizeOnDisk"]
                }
            }),
            pagination_properties(),
        ]))
    }

    #[instrument(skip(self, args), fields(tool = "radarr_get_movies"))]
    async fn execute(&self, args: serde_json::Value) -> McpServerResult<ToolResult> {
        let query: MovieQuery = parse_query(args)?;
        run_query(self.source.as_ref(), &query, "movies").await
    }
}

/// Tool to list Sonarr series.
pub struct ListSeriesTool {
    source: Arc<dyn CollectionSource<Series>>,
}

impl ListSeriesTool {
    /// Create the tool over a series source.
    pub fn new(source: Arc<dyn CollectionSource<Series>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for ListSeriesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "sonarr_get_series",
            "List series in the Sonarr library with optional filtering, sorting and pagination",
        )
        .with_service(Service::Sonarr)
        .with_category("library")
        .with_schema(object_schema(&[
            common_properties(),
            serde_json::json!({
                "network": {
                    "type": "string",
                    "description": "Case-insensitive network substring"
                },
                "seriesType": {
                    "type": "string",
                    "enum": ["standard", "daily", "anime"]
                },
                "tvdbId": {"type": "integer"},
                "sortBy": {
                    "type": "string",
                    "enum": [
                        "title", "sortTitle", "year", "added", "runtime", "network",
                        "sizeOnDisk", "episodeCount", "seasonCount", "percentOfEpisodes"
                    ]
                }
            }),
            pagination_properties(),
        ]))
    }

    #[instrument(skip(self, args), fields(tool = "sonarr_get_series"))]
    async fn execute(&self, args: serde_json::Value) -> McpServerResult<ToolResult> {
        let query: SeriesQuery = parse_query(args)?;
        run_query(self.source.as_ref(), &query, "series").await
    }
}

/// Get all collection listing tools.
pub fn collection_tools(
    movies: Arc<dyn CollectionSource<Movie>>,
    series: Arc<dyn CollectionSource<Series>>,
) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(ListMoviesTool::new(movies)),
        Arc::new(ListSeriesTool::new(series)),
    ]
}
