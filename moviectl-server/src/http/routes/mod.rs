//! Route handlers organized by resource
//!
//! Every movie route lives under `/api/v1/movies`.

pub mod health;
pub mod movies;
pub mod reports;
