//! Domain models with validation at construction
//!
//! All client input is validated when converting request bodies into these
//! types. Invalid input returns ValidationError, not panic.

pub mod movie;
pub mod name;
pub mod report;
pub mod validation;

pub use movie::{CreateMovieRequest, Movie, MoviePatch, NewMovie, UpdateMovieRequest};
pub use name::MovieName;
pub use report::{GenreSummary, YearStats};
pub use validation::ValidationError;
