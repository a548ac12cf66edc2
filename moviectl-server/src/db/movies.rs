//! PostgreSQL movie store
//!
//! - list: one SELECT built from the parsed query (plus a COUNT when `page` was given)
//! - create: INSERT ... RETURNING, unique violations mapped to `Duplicate`
//! - update: SELECT ... FOR UPDATE + UPDATE in one transaction
//! - reports: single GROUP BY statements executed by the engine

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use moviectl_core::{GenreSummary, Movie, MoviePatch, MovieQuery, NewMovie, YearStats};

use super::query::{self, MOVIE_COLUMNS};
use super::store::{DbError, MovieStore};

/// Minimum rating for a movie to count towards the yearly statistics
pub const STATS_MIN_RATING: f64 = 4.5;

/// Movie record from database
#[derive(Debug, Clone, FromRow)]
struct MovieRow {
    id: Uuid,
    name: String,
    description: String,
    duration: i32,
    ratings: Option<f64>,
    total_rating: Option<i64>,
    release_year: i32,
    release_date: Option<NaiveDate>,
    genres: Vec<String>,
    directors: Vec<String>,
    actors: Vec<String>,
    cover_image: Option<String>,
    price: f64,
    created_at: DateTime<Utc>,
}

impl From<MovieRow> for Movie {
    fn from(r: MovieRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            duration: r.duration,
            ratings: r.ratings,
            total_rating: r.total_rating,
            release_year: r.release_year,
            release_date: r.release_date,
            genres: r.genres,
            directors: r.directors,
            actors: r.actors,
            cover_image: r.cover_image,
            price: r.price,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct YearStatsRow {
    release_year: i32,
    avg_rating: f64,
    avg_price: f64,
    min_price: f64,
    max_price: f64,
    price_total: f64,
    movie_count: i64,
}

impl From<YearStatsRow> for YearStats {
    fn from(r: YearStatsRow) -> Self {
        Self {
            release_year: r.release_year,
            avg_rating: r.avg_rating,
            avg_price: r.avg_price,
            min_price: r.min_price,
            max_price: r.max_price,
            price_total: r.price_total,
            movie_count: r.movie_count,
        }
    }
}

#[derive(Debug, FromRow)]
struct GenreRow {
    genre: String,
    movie_count: i64,
    movies: Vec<String>,
}

/// Movie repository backed by a PgPool
#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-constraint violation on `name` to `DbError::Duplicate`.
fn map_write_error(err: sqlx::Error, name: &str) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DbError::Duplicate {
                field: "name",
                value: name.to_owned(),
            };
        }
    }
    DbError::Sqlx(err)
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, DbError> {
        let page = query.pagination;
        if page.page_requested {
            let mut count = query::count_movies(&query.filters);
            let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;
            if page.offset() >= total.max(0) as u64 {
                tracing::debug!(page = page.page, total, "requested page past the end");
                return Err(DbError::PageNotFound);
            }
        }

        let mut select = query::select_movies(query);
        let rows: Vec<MovieRow> = select.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Movie, DbError> {
        let row: MovieRow =
            sqlx::query_as(&format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| DbError::movie_not_found(id))?;

        Ok(row.into())
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, DbError> {
        let row: MovieRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO movies (
                name, description, duration, ratings, total_rating, release_year,
                release_date, genres, directors, actors, cover_image, price
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(movie.name.as_str())
        .bind(&movie.description)
        .bind(movie.duration)
        .bind(movie.ratings)
        .bind(movie.total_rating)
        .bind(movie.release_year)
        .bind(movie.release_date)
        .bind(&movie.genres)
        .bind(&movie.directors)
        .bind(&movie.actors)
        .bind(&movie.cover_image)
        .bind(movie.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, movie.name.as_str()))?;

        tracing::info!(id = %row.id, name = %row.name, "movie created");
        Ok(row.into())
    }

    async fn update(&self, id: Uuid, patch: MoviePatch) -> Result<Movie, DbError> {
        let mut tx = self.pool.begin().await?;

        let row: MovieRow = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::movie_not_found(id))?;

        let mut movie = Movie::from(row);
        if patch.is_empty() {
            tx.commit().await?;
            return Ok(movie);
        }
        patch.apply(&mut movie);

        let row: MovieRow = sqlx::query_as(&format!(
            r#"
            UPDATE movies SET
                name = $2, description = $3, duration = $4, ratings = $5,
                total_rating = $6, release_year = $7, release_date = $8, genres = $9,
                directors = $10, actors = $11, cover_image = $12, price = $13
            WHERE id = $1
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&movie.name)
        .bind(&movie.description)
        .bind(movie.duration)
        .bind(movie.ratings)
        .bind(movie.total_rating)
        .bind(movie.release_year)
        .bind(movie.release_date)
        .bind(&movie.genres)
        .bind(&movie.directors)
        .bind(&movie.actors)
        .bind(&movie.cover_image)
        .bind(movie.price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &movie.name))?;

        tx.commit().await?;
        tracing::info!(%id, "movie updated");
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::movie_not_found(id));
        }
        tracing::info!(%id, "movie deleted");
        Ok(())
    }

    async fn stats_by_year(&self) -> Result<Vec<YearStats>, DbError> {
        let rows: Vec<YearStatsRow> = sqlx::query_as(
            r#"
            SELECT
                release_year,
                AVG(ratings) AS avg_rating,
                AVG(price) AS avg_price,
                MIN(price) AS min_price,
                MAX(price) AS max_price,
                SUM(price) AS price_total,
                COUNT(*) AS movie_count
            FROM movies
            WHERE ratings >= $1
            GROUP BY release_year
            ORDER BY min_price ASC, release_year ASC
            "#,
        )
        .bind(STATS_MIN_RATING)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(YearStats::from).collect())
    }

    async fn genre_summary(&self, genre: &str) -> Result<Vec<GenreSummary>, DbError> {
        let rows: Vec<GenreRow> = sqlx::query_as(
            r#"
            SELECT
                g.genre,
                COUNT(*) AS movie_count,
                array_agg(m.name ORDER BY m.created_at, m.id) AS movies
            FROM movies m
            CROSS JOIN LATERAL unnest(m.genres) AS g(genre)
            WHERE g.genre = $1
            GROUP BY g.genre
            ORDER BY movie_count DESC
            "#,
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| GenreSummary {
                genre: r.genre,
                movie_count: r.movie_count,
                movies: r.movies,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviectl_core::{CreateMovieRequest, QueryParams, UpdateMovieRequest};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p moviectl-server -- --ignored

    async fn store() -> PgMovieStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        PgMovieStore::new(pool)
    }

    fn new_movie(genre: &str, ratings: f64, price: f64) -> NewMovie {
        let req = CreateMovieRequest {
            name: Some(format!("Test Movie {}", Uuid::new_v4())),
            description: Some("integration test".into()),
            duration: Some(100),
            ratings: Some(ratings),
            release_year: Some(1999),
            genres: Some(vec![genre.to_owned()]),
            price: Some(price),
            ..Default::default()
        };
        NewMovie::try_from(req).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_update_delete() {
        let store = store().await;
        let created = store.create(new_movie("Drama", 8.0, 10.0)).await.unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.name, created.name);

        let patch = MoviePatch::try_from(UpdateMovieRequest {
            price: Some(4.0),
            ..Default::default()
        })
        .unwrap();
        let updated = store.update(created.id, patch).await.unwrap();
        assert_eq!(updated.price, 4.0);
        assert_eq!(updated.created_at, created.created_at);

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get(created.id).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete(created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_rejected() {
        let store = store().await;
        let movie = new_movie("Drama", 8.0, 10.0);
        let created = store.create(movie.clone()).await.unwrap();

        let err = store.create(movie).await.unwrap_err();
        assert!(matches!(err, DbError::Duplicate { field: "name", .. }));

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn genre_summary_counts_members() {
        let store = store().await;
        let genre = format!("genre-{}", Uuid::new_v4());
        let a = store.create(new_movie(&genre, 7.0, 5.0)).await.unwrap();
        let b = store.create(new_movie(&genre, 9.0, 6.0)).await.unwrap();

        let summary = store.genre_summary(&genre).await.unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].genre, genre);
        assert_eq!(summary[0].movie_count, 2);
        assert_eq!(summary[0].movies, vec![a.name.clone(), b.name.clone()]);

        let params: QueryParams = [("genres", genre.as_str()), ("sort", "-ratings")]
            .into_iter()
            .collect();
        let listed = store.list(&MovieQuery::parse(&params).unwrap()).await.unwrap();
        assert_eq!(listed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![b.id, a.id]);

        store.delete(a.id).await.unwrap();
        store.delete(b.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn explicit_first_page_of_empty_result_is_error() {
        let store = store().await;
        let params: QueryParams = [("name", "no such movie"), ("page", "1")]
            .into_iter()
            .collect();
        let err = store
            .list(&MovieQuery::parse(&params).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::PageNotFound));

        // without an explicit page an empty result is just empty
        let params: QueryParams = [("name", "no such movie")].into_iter().collect();
        let listed = store.list(&MovieQuery::parse(&params).unwrap()).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn page_past_end_is_error() {
        let store = store().await;
        let params: QueryParams = [("name", "no such movie"), ("page", "2")]
            .into_iter()
            .collect();
        let err = store
            .list(&MovieQuery::parse(&params).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::PageNotFound));
    }
}
