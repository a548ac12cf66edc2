//! List query helper
//!
//! Turns the raw query-string pairs of a list request into a [`MovieQuery`]:
//!
//! - `sort=-ratings,price` orders results (default `-createdAt`)
//! - `fields=name,price` / `fields=-description` selects fields
//! - `page=2&limit=20` paginates (defaults 1 and 10)
//! - any other key filters: `genres=Action`, `ratings[gte]=7`
//!
//! The resulting value is consumed by the SQL renderer in the server crate.

pub mod fields;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use fields::FieldSelection;
pub use filter::{Filter, FilterOp, FilterValue};
pub use pagination::Pagination;
pub use sort::{Direction, Sort, SortKey};

use crate::error::QueryError;

const SORT: &str = "sort";
const FIELDS: &str = "fields";
const PAGE: &str = "page";
const LIMIT: &str = "limit";

/// Raw query-string pairs in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Last value for `key`; later occurrences override earlier ones.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value of `key` with `value`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.retain(|(k, _)| k != key);
        self.0.push((key.to_owned(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

/// Fully parsed list request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieQuery {
    /// AND-ed conditions, in request order
    pub filters: Vec<Filter>,
    pub sort: Sort,
    pub fields: FieldSelection,
    pub pagination: Pagination,
}

impl MovieQuery {
    /// Parse all four query features from the raw pairs.
    ///
    /// ```
    /// use moviectl_core::{MovieQuery, QueryParams, MovieField};
    ///
    /// let params: QueryParams = [("sort", "-ratings"), ("genres", "Drama"), ("limit", "5")]
    ///     .into_iter()
    ///     .collect();
    /// let query = MovieQuery::parse(&params).unwrap();
    /// assert_eq!(query.sort.keys()[0].field, MovieField::Ratings);
    /// assert_eq!(query.filters.len(), 1);
    /// assert_eq!(query.pagination.limit, 5);
    /// ```
    pub fn parse(params: &QueryParams) -> Result<Self, QueryError> {
        let filters = params
            .iter()
            .filter(|(key, _)| ![SORT, FIELDS, PAGE, LIMIT].contains(key))
            .map(|(key, value)| Filter::parse(key, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            filters,
            sort: Sort::parse(params.get(SORT))?,
            fields: FieldSelection::parse(params.get(FIELDS))?,
            pagination: Pagination::from_raw(params.get(PAGE), params.get(LIMIT)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::MovieField;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_query_uses_defaults() {
        let query = MovieQuery::parse(&QueryParams::default()).unwrap();
        assert_eq!(query, MovieQuery::default());
    }

    #[test]
    fn reserved_keys_are_not_filters() {
        let query = MovieQuery::parse(&params(&[
            ("sort", "price"),
            ("fields", "name"),
            ("page", "2"),
            ("limit", "3"),
        ]))
        .unwrap();
        assert!(query.filters.is_empty());
        assert_eq!(query.pagination.offset(), 3);
        assert!(query.fields.contains(MovieField::Name));
        assert!(!query.fields.contains(MovieField::Price));
    }

    #[test]
    fn filters_keep_request_order() {
        let query = MovieQuery::parse(&params(&[
            ("ratings[gte]", "5"),
            ("genres", "Drama"),
            ("ratings[lt]", "9"),
        ]))
        .unwrap();
        let ops: Vec<_> = query.filters.iter().map(|f| (f.field, f.op)).collect();
        assert_eq!(
            ops,
            vec![
                (MovieField::Ratings, FilterOp::Gte),
                (MovieField::Genres, FilterOp::Eq),
                (MovieField::Ratings, FilterOp::Lt),
            ]
        );
    }

    #[test]
    fn first_bad_filter_fails_whole_query() {
        let err = MovieQuery::parse(&params(&[("ratings", "high")])).unwrap_err();
        assert!(matches!(err, QueryError::InvalidValue { .. }));
    }

    #[test]
    fn set_overrides_all_occurrences() {
        let mut p = params(&[("limit", "50"), ("sort", "name"), ("limit", "20")]);
        p.set("limit", "5");
        assert_eq!(p.get("limit"), Some("5"));
        assert_eq!(p.iter().filter(|(k, _)| *k == "limit").count(), 1);
    }

    #[test]
    fn last_value_wins() {
        let p = params(&[("sort", "name"), ("sort", "-price")]);
        assert_eq!(p.get("sort"), Some("-price"));
    }
}
