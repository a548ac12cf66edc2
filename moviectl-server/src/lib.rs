//! moviectl-server: REST API for the movies collection
//!
//! - `db`: connection pool, schema migration and the PostgreSQL movie store
//! - `http`: axum router, JSON envelopes and error mapping

pub mod db;
pub mod http;

pub use db::{DbError, MovieStore, PgMovieStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
