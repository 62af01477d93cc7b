//! # Predicates
//!
//! Individually composable filters. Every predicate takes the collection by
//! value plus an optional constraint and returns the surviving items in their
//! original order. An absent constraint returns the input untouched.

use crate::entity::{Genred, Tagged, Titled, Yeared};

/// Case-insensitive substring containment.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keep items whose title contains `title`, ignoring case.
///
/// An empty string is treated as no constraint.
///
/// # Example
///
/// ```
/// use media_query::entity::Movie;
/// use media_query::predicates::filter_by_title;
///
/// let movies = vec![
///     Movie { title: "The Matrix".into(), ..Default::default() },
///     Movie { title: "Alien".into(), ..Default::default() },
/// ];
/// let hits = filter_by_title(movies, Some("matrix"));
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_by_title<T: Titled>(mut items: Vec<T>, title: Option<&str>) -> Vec<T> {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return items;
    };
    let needle = title.to_lowercase();
    items.retain(|item| contains_ignore_case(item.title(), &needle));
    items
}

/// Keep items whose year lies in `[from, to]`, both bounds inclusive.
///
/// Either bound may be omitted. An item without a year fails any present bound.
pub fn filter_by_year_range<T: Yeared>(
    mut items: Vec<T>,
    from: Option<i32>,
    to: Option<i32>,
) -> Vec<T> {
    if from.is_none() && to.is_none() {
        return items;
    }
    items.retain(|item| {
        let Some(year) = item.year() else {
            return false;
        };
        from.map_or(true, |from| year >= from) && to.map_or(true, |to| year <= to)
    });
    items
}

/// Keep items sharing at least one genre with `genres`, ignoring case.
///
/// Items without genres never match a non-empty constraint.
pub fn filter_by_genres<T: Genred>(mut items: Vec<T>, genres: Option<&[String]>) -> Vec<T> {
    let Some(genres) = genres.filter(|g| !g.is_empty()) else {
        return items;
    };
    let wanted: Vec<String> = genres.iter().map(|g| g.to_lowercase()).collect();
    items.retain(|item| {
        item.genres()
            .iter()
            .any(|genre| wanted.contains(&genre.to_lowercase()))
    });
    items
}

/// Keep items carrying at least one of the tag ids in `tags`.
///
/// Untagged items never match a non-empty constraint.
pub fn filter_by_tags<T: Tagged>(mut items: Vec<T>, tags: Option<&[i64]>) -> Vec<T> {
    let Some(tags) = tags.filter(|t| !t.is_empty()) else {
        return items;
    };
    items.retain(|item| item.tags().iter().any(|tag| tags.contains(tag)));
    items
}

/// Keep items whose field equals `expected`.
///
/// Items where `field` yields `None` are dropped when a constraint is present.
///
/// # Example
///
/// ```
/// use media_query::entity::Movie;
/// use media_query::predicates::filter_exact;
///
/// let movies = vec![
///     Movie { has_file: Some(true), ..Default::default() },
///     Movie { has_file: Some(false), ..Default::default() },
///     Movie::default(),
/// ];
/// let on_disk = filter_exact(movies, Some(&true), |m| m.has_file);
/// assert_eq!(on_disk.len(), 1);
/// ```
pub fn filter_exact<T, V, F>(mut items: Vec<T>, expected: Option<&V>, field: F) -> Vec<T>
where
    V: PartialEq,
    F: Fn(&T) -> Option<V>,
{
    let Some(expected) = expected else {
        return items;
    };
    items.retain(|item| field(item).as_ref() == Some(expected));
    items
}

/// Keep items whose text field equals `expected`, ignoring case.
///
/// Case folding is Unicode-aware, the same folding title and network
/// matching use.
pub fn filter_exact_text<T, F>(mut items: Vec<T>, expected: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    let Some(expected) = expected else {
        return items;
    };
    let expected = expected.to_lowercase();
    items.retain(|item| field(item).is_some_and(|value| value.to_lowercase() == expected));
    items
}

/// Keep items whose text field equals `expected` byte for byte.
///
/// For identifiers such as IMDb ids, where case is part of the value.
pub fn filter_exact_str<T, F>(mut items: Vec<T>, expected: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    let Some(expected) = expected else {
        return items;
    };
    items.retain(|item| field(item) == Some(expected));
    items
}

/// Keep items whose text field contains `needle`, ignoring case.
///
/// Used for fields with display variants such as networks. Empty needles are
/// treated as no constraint, like titles.
pub fn filter_contains<T, F>(mut items: Vec<T>, needle: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    let Some(needle) = needle.filter(|n| !n.is_empty()) else {
        return items;
    };
    let needle = needle.to_lowercase();
    items.retain(|item| field(item).is_some_and(|value| contains_ignore_case(value, &needle)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Movie, Series};

    fn movie(title: &str, year: Option<i32>, genres: &[&str], tags: &[i64]) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            tags: tags.to_vec(),
            ..Default::default()
        }
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let movies = vec![
            movie("The Dark Knight", None, &[], &[]),
            movie("Knives Out", None, &[], &[]),
            movie("Dark City", None, &[], &[]),
        ];
        let hits = filter_by_title(movies, Some("DARK"));
        assert_eq!(titles(&hits), vec!["The Dark Knight", "Dark City"]);
    }

    #[test]
    fn test_empty_title_is_identity() {
        let movies = vec![movie("A", None, &[], &[]), movie("B", None, &[], &[])];
        let hits = filter_by_title(movies.clone(), Some(""));
        assert_eq!(hits, movies);
        assert_eq!(filter_by_title(movies.clone(), None), movies);
    }

    #[test]
    fn test_year_range_inclusive_bounds() {
        let movies = vec![
            movie("1999", Some(1999), &[], &[]),
            movie("2000", Some(2000), &[], &[]),
            movie("2010", Some(2010), &[], &[]),
            movie("2011", Some(2011), &[], &[]),
            movie("unknown", None, &[], &[]),
        ];

        let hits = filter_by_year_range(movies.clone(), Some(2000), Some(2010));
        assert_eq!(titles(&hits), vec!["2000", "2010"]);

        let hits = filter_by_year_range(movies.clone(), Some(2010), None);
        assert_eq!(titles(&hits), vec!["2010", "2011"]);

        let hits = filter_by_year_range(movies.clone(), None, Some(1999));
        assert_eq!(titles(&hits), vec!["1999"]);

        assert_eq!(filter_by_year_range(movies.clone(), None, None), movies);
    }

    #[test]
    fn test_genres_any_of() {
        let movies = vec![
            movie("drama", None, &["Drama"], &[]),
            movie("horror", None, &["Horror"], &[]),
            movie("none", None, &[], &[]),
        ];
        let wanted = vec!["drama".to_string(), "comedy".to_string()];
        let hits = filter_by_genres(movies, Some(wanted.as_slice()));
        assert_eq!(titles(&hits), vec!["drama"]);
    }

    #[test]
    fn test_empty_genre_list_is_identity() {
        let movies = vec![movie("none", None, &[], &[])];
        let hits = filter_by_genres(movies.clone(), Some(&[][..]));
        assert_eq!(hits, movies);
    }

    #[test]
    fn test_tags_any_of() {
        let movies = vec![
            movie("a", None, &[], &[1, 2]),
            movie("b", None, &[], &[3]),
            movie("c", None, &[], &[]),
        ];
        let hits = filter_by_tags(movies, Some(&[2, 3][..]));
        assert_eq!(titles(&hits), vec!["a", "b"]);
    }

    #[test]
    fn test_exact_drops_missing_values() {
        let movies = vec![
            Movie { title: "a".into(), quality_profile_id: Some(4), ..Default::default() },
            Movie { title: "b".into(), quality_profile_id: Some(1), ..Default::default() },
            Movie { title: "c".into(), ..Default::default() },
        ];
        let hits = filter_exact(movies, Some(&4), |m| m.quality_profile_id);
        assert_eq!(titles(&hits), vec!["a"]);
    }

    #[test]
    fn test_exact_text_ignores_case() {
        let movies = vec![
            Movie { title: "a".into(), status: Some("inCinemas".into()), ..Default::default() },
            Movie { title: "b".into(), status: Some("released".into()), ..Default::default() },
        ];
        let hits = filter_exact_text(movies, Some("incinemas"), |m| m.status.as_deref());
        assert_eq!(titles(&hits), vec!["a"]);
    }

    #[test]
    fn test_exact_text_folds_non_ascii() {
        let movies = vec![
            Movie { title: "a".into(), status: Some("ÉTÉ".into()), ..Default::default() },
            Movie { title: "b".into(), status: Some("ete".into()), ..Default::default() },
            Movie { title: "c".into(), ..Default::default() },
        ];
        let hits = filter_exact_text(movies, Some("été"), |m| m.status.as_deref());
        assert_eq!(titles(&hits), vec!["a"]);
    }

    #[test]
    fn test_exact_str_keeps_case() {
        let movies = vec![
            Movie { title: "a".into(), imdb_id: Some("tt0078748".into()), ..Default::default() },
            Movie { title: "b".into(), imdb_id: Some("TT0078748".into()), ..Default::default() },
            Movie { title: "c".into(), ..Default::default() },
        ];
        let hits = filter_exact_str(movies, Some("tt0078748"), |m| m.imdb_id.as_deref());
        assert_eq!(titles(&hits), vec!["a"]);
    }

    #[test]
    fn test_network_uses_substring() {
        let series = vec![
            Series { title: "a".into(), network: Some("BBC One".into()), ..Default::default() },
            Series { title: "b".into(), network: Some("BBC Two".into()), ..Default::default() },
            Series { title: "c".into(), network: Some("HBO".into()), ..Default::default() },
            Series { title: "d".into(), ..Default::default() },
        ];
        let hits = filter_contains(series, Some("bbc"), |s| s.network.as_deref());
        let names: Vec<_> = hits.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
