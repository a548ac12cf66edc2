//! Sort keys: `sort=-ratings,price`

use crate::error::QueryError;
use crate::field::MovieField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: MovieField,
    pub direction: Direction,
}

/// Ordered sort keys. Always ends with `id` so equal keys page deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort(Vec<SortKey>);

impl Sort {
    /// Parse a comma (or whitespace) separated list; `None` or blank gives `-createdAt`.
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let mut keys = Vec::new();

        for token in raw
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let (name, direction) = match token.strip_prefix('-') {
                Some(name) => (name, Direction::Desc),
                None => (token.strip_prefix('+').unwrap_or(token), Direction::Asc),
            };
            let field: MovieField = name.parse()?;
            if !field.is_sortable() {
                return Err(QueryError::NotSortable(name.to_owned()));
            }
            // First mention wins, later duplicates would be dead ORDER BY terms
            if keys.iter().any(|k: &SortKey| k.field == field) {
                continue;
            }
            keys.push(SortKey { field, direction });
        }

        if keys.is_empty() {
            keys.push(SortKey {
                field: MovieField::CreatedAt,
                direction: Direction::Desc,
            });
        }
        if !keys.iter().any(|k| k.field == MovieField::Id) {
            keys.push(SortKey {
                field: MovieField::Id,
                direction: Direction::Asc,
            });
        }

        Ok(Self(keys))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self(vec![
            SortKey {
                field: MovieField::CreatedAt,
                direction: Direction::Desc,
            },
            SortKey {
                field: MovieField::Id,
                direction: Direction::Asc,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(sort: &Sort) -> Vec<(MovieField, Direction)> {
        sort.keys().iter().map(|k| (k.field, k.direction)).collect()
    }

    #[test]
    fn default_is_newest_first() {
        assert_eq!(Sort::parse(None).unwrap(), Sort::default());
        assert_eq!(Sort::parse(Some("  ")).unwrap(), Sort::default());
    }

    #[test]
    fn parses_directions() {
        let sort = Sort::parse(Some("-ratings,price")).unwrap();
        assert_eq!(
            fields(&sort),
            vec![
                (MovieField::Ratings, Direction::Desc),
                (MovieField::Price, Direction::Asc),
                (MovieField::Id, Direction::Asc),
            ]
        );
    }

    #[test]
    fn accepts_space_separated() {
        let sort = Sort::parse(Some("releaseYear -name")).unwrap();
        assert_eq!(sort.keys()[0].field, MovieField::ReleaseYear);
        assert_eq!(sort.keys()[1].field, MovieField::Name);
        assert_eq!(sort.keys()[1].direction, Direction::Desc);
    }

    #[test]
    fn explicit_id_not_duplicated() {
        let sort = Sort::parse(Some("-id")).unwrap();
        assert_eq!(fields(&sort), vec![(MovieField::Id, Direction::Desc)]);
    }

    #[test]
    fn duplicate_keys_collapse() {
        let sort = Sort::parse(Some("price,-price")).unwrap();
        assert_eq!(sort.keys().len(), 2);
        assert_eq!(sort.keys()[0].direction, Direction::Asc);
    }

    #[test]
    fn rejects_unknown_and_list_fields() {
        assert_eq!(
            Sort::parse(Some("budget")).unwrap_err(),
            QueryError::UnknownField("budget".into())
        );
        assert_eq!(
            Sort::parse(Some("-genres")).unwrap_err(),
            QueryError::NotSortable("genres".into())
        );
    }
}
