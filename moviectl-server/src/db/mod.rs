//! Database layer - connection pool, schema and the movie store
//!
//! # Design Principles
//!
//! - Connection pool with explicit limits - no Arc<Mutex<Connection>>
//! - Rely on DB constraints (UNIQUE, CHECK), map violations - no check-then-insert
//! - Identifiers in dynamic SQL come only from `MovieField`; values are always bound
//! - Transactions for read-modify-write

pub mod migrations;
pub mod movies;
pub mod pool;
pub mod query;
pub mod store;

pub use movies::PgMovieStore;
pub use pool::{create_pool, create_pool_with_options};
pub use store::{DbError, MovieStore};
