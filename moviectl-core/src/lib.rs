//! moviectl-core: domain types shared by the moviectl server and CLI
//!
//! - `model`: the movie record, create/update payloads and report rows
//! - `query`: parsing of list query strings (filter, sort, field selection, pagination)
//! - `config`: layered configuration (file, environment, defaults)

pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod query;

pub use config::MoviectlConfig;
pub use error::QueryError;
pub use field::{FieldKind, MovieField};
pub use model::{
    CreateMovieRequest, GenreSummary, Movie, MovieName, MoviePatch, NewMovie, UpdateMovieRequest,
    ValidationError, YearStats,
};
pub use query::{
    Direction, FieldSelection, Filter, FilterOp, FilterValue, MovieQuery, Pagination, QueryParams,
    Sort, SortKey,
};
