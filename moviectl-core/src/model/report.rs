//! Rows produced by the aggregation reports

use serde::{Deserialize, Serialize};

/// Rating and price statistics for one release year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStats {
    pub release_year: i32,
    pub avg_rating: f64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_total: f64,
    pub movie_count: i64,
}

/// Movies carrying one genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSummary {
    pub genre: String,
    pub movie_count: i64,
    /// Movie names, oldest first
    pub movies: Vec<String>,
}
