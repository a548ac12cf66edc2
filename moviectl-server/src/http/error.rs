//! API error type with IntoResponse
//!
//! Two outcomes only: a failed create is 400, every other failure is 404.
//! The client sees the underlying error's message in a `Failed` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use moviectl_core::{QueryError, ValidationError};

use super::envelope::Failure;
use crate::db::DbError;

#[derive(Debug)]
pub enum ApiError {
    /// Creation failed (400)
    BadRequest { message: String },

    /// Any other failure (404)
    NotFound { message: String },
}

impl ApiError {
    /// Re-tag any error as a creation failure.
    ///
    /// Used as `.map_err(ApiError::bad_request)` in the create handler.
    pub fn bad_request<E: Into<ApiError>>(err: E) -> Self {
        Self::BadRequest {
            message: err.into().into_message(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message } | Self::NotFound { message } => message,
        }
    }

    fn into_message(self) -> String {
        match self {
            Self::BadRequest { message } | Self::NotFound { message } => message,
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), message = %self.message(), "request failed");
        (status, Json(Failure::new(self.into_message()))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        if let DbError::Sqlx(inner) = &e {
            tracing::error!("Database error: {}", inner);
        }
        Self::not_found(e.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::not_found(e.to_string())
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        Self::not_found(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        tracing::error!("Serialization error: {}", e);
        Self::not_found(e.to_string())
    }
}
