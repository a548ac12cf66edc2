//! Response envelopes
//!
//! Success: `{"status": "Success", ["length"|"count": n,] "data": {...}}`
//! Failure: `{"status": "Failed", "message": "..."}`

use serde::Serialize;
use serde_json::Value;

use moviectl_core::{GenreSummary, Movie, YearStats};

pub const SUCCESS: &str = "Success";
pub const FAILED: &str = "Failed";

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    /// Number of movies in a list response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Number of rows in a report response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            length: None,
            count: None,
            data,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub status: &'static str,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: FAILED,
            message: message.into(),
        }
    }
}

/// `data` of list responses; movies are projected JSON objects
#[derive(Debug, Serialize)]
pub struct MoviesData {
    pub movies: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct MovieData {
    pub movie: Movie,
}

#[derive(Debug, Serialize)]
pub struct StatsData {
    pub stats: Vec<YearStats>,
}

#[derive(Debug, Serialize)]
pub struct GenreData {
    pub movies: Vec<GenreSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_unset_counters() {
        let body = serde_json::to_value(Envelope::success(json!({"x": 1}))).unwrap();
        assert_eq!(body, json!({"status": "Success", "data": {"x": 1}}));
    }

    #[test]
    fn list_envelope_has_length() {
        let env = Envelope::success(MoviesData { movies: vec![json!({"name": "Heat"})] }).with_length(1);
        let body = serde_json::to_value(env).unwrap();
        assert_eq!(body["length"], 1);
        assert_eq!(body["data"]["movies"][0]["name"], "Heat");
        assert!(body.get("count").is_none());
    }

    #[test]
    fn failure_shape() {
        let body = serde_json::to_value(Failure::new("boom")).unwrap();
        assert_eq!(body, json!({"status": "Failed", "message": "boom"}));
    }
}
