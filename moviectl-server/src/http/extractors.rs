//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError` so every failure, including a bad
//! path or body, is reported in the standard `Failed` envelope.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use moviectl_core::QueryParams;

use super::error::ApiError;

/// Movie id from the `{id}` path segment.
///
/// An unparsable id is reported like a missing movie (404).
pub struct MovieId(pub Uuid);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound {
                message: e.body_text(),
            })?;

        let uuid = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound {
            message: format!("Invalid movie ID: '{}'", id),
        })?;

        Ok(Self(uuid))
    }
}

/// Genre name from the `{genre}` path segment.
///
/// A segment that doesn't decode is reported in the `Failed` envelope (404).
pub struct Genre(pub String);

impl<S> FromRequestParts<S> for Genre
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(genre): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound {
                message: e.body_text(),
            })?;

        Ok(Self(genre))
    }
}

/// All query-string pairs, in order, for the list query helper
pub struct ListParams(pub QueryParams);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound {
                message: e.body_text(),
            })?;

        Ok(Self(QueryParams::from(pairs)))
    }
}

/// JSON request body; malformed or mistyped bodies are 400
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        Ok(Self(value))
    }
}
