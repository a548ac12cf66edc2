//! Read-only aggregation reports

use axum::{extract::State, routing::get, Json, Router};

use crate::http::envelope::{Envelope, GenreData, StatsData};
use crate::http::error::ApiError;
use crate::http::extractors::Genre;
use crate::http::server::AppState;

/// GET /api/v1/movies/movie-stats - rating/price statistics per release year
async fn movie_stats(State(state): State<AppState>) -> Result<Json<Envelope<StatsData>>, ApiError> {
    let stats = state.store.stats_by_year().await?;
    let count = stats.len();
    Ok(Json(Envelope::success(StatsData { stats }).with_count(count)))
}

/// GET /api/v1/movies/movies-by-genre/{genre}
async fn movies_by_genre(
    State(state): State<AppState>,
    Genre(genre): Genre,
) -> Result<Json<Envelope<GenreData>>, ApiError> {
    let movies = state.store.genre_summary(&genre).await?;
    let count = movies.len();
    Ok(Json(Envelope::success(GenreData { movies }).with_count(count)))
}

/// Report routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/movies/movie-stats", get(movie_stats))
        .route("/api/v1/movies/movies-by-genre/{genre}", get(movies_by_genre))
}
