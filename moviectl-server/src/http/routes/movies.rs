//! Movie CRUD endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use moviectl_core::{
    CreateMovieRequest, MoviePatch, MovieQuery, NewMovie, QueryParams, UpdateMovieRequest,
};

use crate::http::envelope::{Envelope, MovieData, MoviesData};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ListParams, MovieId};
use crate::http::server::AppState;

/// Page size and ordering forced by the highest-rated alias
const TOP_RATED_LIMIT: &str = "5";
const TOP_RATED_SORT: &str = "-ratings";

/// GET /api/v1/movies - filter, sort, select fields, paginate
async fn list_movies(
    State(state): State<AppState>,
    ListParams(params): ListParams,
) -> Result<Json<Envelope<MoviesData>>, ApiError> {
    list(&state, params).await
}

/// GET /api/v1/movies/highest-rated - top five by rating; other parameters still apply
async fn highest_rated(
    State(state): State<AppState>,
    ListParams(mut params): ListParams,
) -> Result<Json<Envelope<MoviesData>>, ApiError> {
    params.set("limit", TOP_RATED_LIMIT);
    params.set("sort", TOP_RATED_SORT);
    list(&state, params).await
}

async fn list(state: &AppState, params: QueryParams) -> Result<Json<Envelope<MoviesData>>, ApiError> {
    let query = MovieQuery::parse(&params)?;
    tracing::debug!(
        filters = query.filters.len(),
        page = query.pagination.page,
        limit = query.pagination.limit,
        "listing movies"
    );

    let movies = state
        .store
        .list(&query)
        .await?
        .into_iter()
        .map(|movie| serde_json::to_value(movie).map(|doc| query.fields.apply(doc)))
        .collect::<Result<Vec<Value>, _>>()?;

    let length = movies.len();
    Ok(Json(Envelope::success(MoviesData { movies }).with_length(length)))
}

/// GET /api/v1/movies/{id}
async fn get_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> Result<Json<Envelope<MovieData>>, ApiError> {
    let movie = state.store.get(id).await?;
    Ok(Json(Envelope::success(MovieData { movie })))
}

/// POST /api/v1/movies - every failure here is a 400
async fn create_movie(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMovieRequest>,
) -> Result<(StatusCode, Json<Envelope<MovieData>>), ApiError> {
    let new_movie = NewMovie::try_from(req).map_err(ApiError::bad_request)?;
    let movie = state
        .store
        .create(new_movie)
        .await
        .map_err(ApiError::bad_request)?;

    Ok((StatusCode::CREATED, Json(Envelope::success(MovieData { movie }))))
}

/// PATCH /api/v1/movies/{id} - validators run on every supplied field
async fn update_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
    JsonBody(req): JsonBody<UpdateMovieRequest>,
) -> Result<Json<Envelope<MovieData>>, ApiError> {
    let patch = MoviePatch::try_from(req)?;
    let movie = state.store.update(id, patch).await?;
    Ok(Json(Envelope::success(MovieData { movie })))
}

/// DELETE /api/v1/movies/{id} - 204 with an empty body
async fn delete_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Movie routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/movies", get(list_movies).post(create_movie))
        .route("/api/v1/movies/highest-rated", get(highest_rated))
        .route(
            "/api/v1/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}
