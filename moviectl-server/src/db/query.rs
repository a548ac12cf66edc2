//! Render a parsed `MovieQuery` into SQL
//!
//! Identifiers come from `MovieField::column`; every value is a bind parameter.
//! Null ordering follows document-store semantics: nulls sort lowest, so they
//! come first ascending and last descending.

use sqlx::{Postgres, QueryBuilder};

use moviectl_core::{Direction, FieldKind, Filter, FilterValue, MovieField, MovieQuery};

/// Every column of the movies table, in `MovieRow` order
pub const MOVIE_COLUMNS: &str = "id, name, description, duration, ratings, total_rating, \
     release_year, release_date, genres, directors, actors, cover_image, price, created_at";

/// `SELECT <all columns> FROM movies WHERE ... ORDER BY ... LIMIT .. OFFSET ..`
pub fn select_movies(query: &MovieQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {MOVIE_COLUMNS} FROM movies"));
    push_filters(&mut builder, &query.filters);

    builder.push(" ORDER BY ");
    let mut order = builder.separated(", ");
    for key in query.sort.keys() {
        order.push(format!(
            "{} {}{}",
            key.field.column(),
            key.direction.sql(),
            nulls_clause(key.field, key.direction)
        ));
    }

    builder.push(" LIMIT ");
    builder.push_bind(i64::from(query.pagination.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(query.pagination.offset()).unwrap_or(i64::MAX));
    builder
}

/// `SELECT COUNT(*) FROM movies WHERE ...`
pub fn count_movies(filters: &[Filter]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM movies");
    push_filters(&mut builder, filters);
    builder
}

fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, filters: &[Filter]) {
    for (i, filter) in filters.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });

        if filter.field.kind() == FieldKind::TextList {
            // list equality means membership
            push_value(builder, &filter.value);
            builder.push(format!(" = ANY({})", filter.field.column()));
        } else {
            builder.push(format!("{} {} ", filter.field.column(), filter.op.sql()));
            push_value(builder, &filter.value);
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &FilterValue) {
    match value.clone() {
        FilterValue::Text(v) => builder.push_bind(v),
        FilterValue::Integer(v) => builder.push_bind(v),
        FilterValue::Float(v) => builder.push_bind(v),
        FilterValue::Uuid(v) => builder.push_bind(v),
        FilterValue::Date(v) => builder.push_bind(v),
        FilterValue::Timestamp(v) => builder.push_bind(v),
    };
}

fn nulls_clause(field: MovieField, direction: Direction) -> &'static str {
    let nullable = matches!(
        field,
        MovieField::Ratings
            | MovieField::TotalRating
            | MovieField::ReleaseDate
            | MovieField::CoverImage
    );
    match (nullable, direction) {
        (false, _) => "",
        (true, Direction::Asc) => " NULLS FIRST",
        (true, Direction::Desc) => " NULLS LAST",
    }
}
