//! # Pagination
//!
//! Offset/limit slicing of an already filtered and sorted collection.

use serde::{Deserialize, Serialize};

/// Requested page window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items; `None` returns everything after `skip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Items to skip. Negative values are clamped to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
}

impl PageRequest {
    /// Create a page request.
    pub fn new(limit: Option<usize>, skip: Option<i64>) -> Self {
        Self { limit, skip }
    }

    /// Effective skip after defaulting and clamping.
    pub fn effective_skip(&self) -> usize {
        self.skip
            .map(|skip| usize::try_from(skip.max(0)).unwrap_or(usize::MAX))
            .unwrap_or(0)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Items on this page.
    pub data: Vec<T>,

    /// Items available before pagination.
    pub total: usize,

    /// Items on this page, always `data.len()`.
    pub returned: usize,

    /// Effective skip after clamping.
    pub skip: usize,

    /// The requested limit, echoed as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Slice `items` into a page.
///
/// `total` counts the collection as passed in. A skip past the end yields an
/// empty page, never an error.
///
/// # Example
///
/// ```
/// use media_query::page::paginate;
///
/// let page = paginate(vec!["A", "B", "C", "D", "E"], Some(2), Some(1));
/// assert_eq!(page.data, vec!["B", "C"]);
/// assert_eq!(page.total, 5);
/// assert_eq!(page.returned, 2);
/// ```
pub fn paginate<T>(items: Vec<T>, limit: Option<usize>, skip: Option<i64>) -> PageResult<T> {
    let request = PageRequest::new(limit, skip);
    paginate_request(items, &request)
}

/// Slice `items` according to `request`.
pub fn paginate_request<T>(items: Vec<T>, request: &PageRequest) -> PageResult<T> {
    let total = items.len();
    let skip = request.effective_skip();

    let data: Vec<T> = match request.limit {
        Some(limit) => items.into_iter().skip(skip).take(limit).collect(),
        None => items.into_iter().skip(skip).collect(),
    };

    PageResult {
        returned: data.len(),
        data,
        total,
        skip,
        limit: request.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters() -> Vec<&'static str> {
        vec!["A", "B", "C", "D", "E"]
    }

    #[test]
    fn test_slice() {
        let page = paginate(letters(), Some(2), Some(1));
        assert_eq!(
            page,
            PageResult {
                data: vec!["B", "C"],
                total: 5,
                returned: 2,
                skip: 1,
                limit: Some(2),
            }
        );
    }

    #[test]
    fn test_no_window_returns_everything() {
        let page = paginate(letters(), None, None);
        assert_eq!(page.data, letters());
        assert_eq!(page.total, 5);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, None);
    }

    #[test]
    fn test_negative_skip_is_clamped() {
        let page = paginate(letters(), Some(2), Some(-3));
        assert_eq!(page.data, vec!["A", "B"]);
        assert_eq!(page.skip, 0);
    }

    #[test]
    fn test_skip_past_end() {
        let page = paginate(letters(), Some(10), Some(9));
        assert!(page.data.is_empty());
        assert_eq!(page.returned, 0);
        assert_eq!(page.total, 5);
        assert_eq!(page.skip, 9);
    }

    #[test]
    fn test_limit_only() {
        let page = paginate(letters(), Some(3), None);
        assert_eq!(page.data, vec!["A", "B", "C"]);
        assert_eq!(page.limit, Some(3));
    }

    #[test]
    fn test_missing_limit_not_serialized() {
        let json = serde_json::to_value(paginate(letters(), None, Some(4))).unwrap();
        assert_eq!(json["data"], serde_json::json!(["E"]));
        assert_eq!(json["returned"], 1);
        assert!(json.get("limit").is_none());
    }
}
