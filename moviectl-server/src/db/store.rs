//! Movie store trait and repository error type
//!
//! Handlers depend on `dyn MovieStore` so the router can be exercised with a
//! fake store; `PgMovieStore` is the production implementation.

use async_trait::async_trait;
use uuid::Uuid;

use moviectl_core::{GenreSummary, Movie, MoviePatch, MovieQuery, NewMovie, QueryError, YearStats};

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with ID '{id}' was not found")]
    NotFound { resource: &'static str, id: String },

    #[error("Duplicate value for {field}: '{value}'")]
    Duplicate { field: &'static str, value: String },

    /// Explicit `page` beyond the last matching document
    #[error("This page is not found!")]
    PageNotFound,

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl DbError {
    pub fn movie_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "Movie",
            id: id.to_string(),
        }
    }
}

/// Persistence operations behind the movie endpoints
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Movies matching the query's filters, sorted and paginated.
    async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, DbError>;

    async fn get(&self, id: Uuid) -> Result<Movie, DbError>;

    async fn create(&self, movie: NewMovie) -> Result<Movie, DbError>;

    /// Apply a validated patch and return the stored result.
    async fn update(&self, id: Uuid, patch: MoviePatch) -> Result<Movie, DbError>;

    async fn delete(&self, id: Uuid) -> Result<(), DbError>;

    /// Statistics per release year over highly rated movies, cheapest year first.
    async fn stats_by_year(&self) -> Result<Vec<YearStats>, DbError>;

    /// Count and names of movies carrying `genre` (zero or one row).
    async fn genre_summary(&self, genre: &str) -> Result<Vec<GenreSummary>, DbError>;
}
