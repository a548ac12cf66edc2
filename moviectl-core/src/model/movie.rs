//! Movie record and the create/update payloads that produce it.
//!
//! Request types mirror the JSON body one-to-one with every field optional, so
//! a missing required field becomes a `ValidationError` with a readable
//! message instead of a serde rejection. Conversion into `NewMovie` /
//! `MoviePatch` runs the field validators.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MovieName, ValidationError};

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 10.0;
const MIN_RELEASE_YEAR: i32 = 1888;
const MAX_RELEASE_YEAR: i32 = 9999;

/// A stored movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Running time in minutes
    pub duration: i32,
    pub ratings: Option<f64>,
    pub total_rating: Option<i64>,
    pub release_year: i32,
    pub release_date: Option<NaiveDate>,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub cover_image: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// POST body for creating a movie
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub ratings: Option<f64>,
    pub total_rating: Option<i64>,
    pub release_year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub genres: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub actors: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub price: Option<f64>,
}

/// PATCH body; absent (or null) fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub ratings: Option<f64>,
    pub total_rating: Option<i64>,
    pub release_year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub genres: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub actors: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub price: Option<f64>,
}

/// Validated movie ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub name: MovieName,
    pub description: String,
    pub duration: i32,
    pub ratings: Option<f64>,
    pub total_rating: Option<i64>,
    pub release_year: i32,
    pub release_date: Option<NaiveDate>,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub cover_image: Option<String>,
    pub price: f64,
}

impl TryFrom<CreateMovieRequest> for NewMovie {
    type Error = ValidationError;

    fn try_from(req: CreateMovieRequest) -> Result<Self, Self::Error> {
        let name = MovieName::new(&required("name", req.name)?)?;
        let description = text("description", required("description", req.description)?)?;
        let duration = duration(required("duration", req.duration)?)?;
        let ratings = req.ratings.map(ratings).transpose()?;
        let total_rating = req.total_rating.map(total_rating).transpose()?;
        let release_year = release_year(required("releaseYear", req.release_year)?)?;
        let genres = genres(required("genres", req.genres)?)?;
        let directors = text_list("directors", req.directors.unwrap_or_default())?;
        let actors = text_list("actors", req.actors.unwrap_or_default())?;
        let cover_image = req
            .cover_image
            .map(|s| text("coverImage", s))
            .transpose()?;
        let price = price(required("price", req.price)?)?;

        Ok(Self {
            name,
            description,
            duration,
            ratings,
            total_rating,
            release_year,
            release_date: req.release_date,
            genres,
            directors,
            actors,
            cover_image,
            price,
        })
    }
}

/// Validated partial update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub name: Option<MovieName>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub ratings: Option<f64>,
    pub total_rating: Option<i64>,
    pub release_year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub genres: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub actors: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub price: Option<f64>,
}

impl TryFrom<UpdateMovieRequest> for MoviePatch {
    type Error = ValidationError;

    fn try_from(req: UpdateMovieRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name.as_deref().map(MovieName::new).transpose()?,
            description: req.description.map(|s| text("description", s)).transpose()?,
            duration: req.duration.map(duration).transpose()?,
            ratings: req.ratings.map(ratings).transpose()?,
            total_rating: req.total_rating.map(total_rating).transpose()?,
            release_year: req.release_year.map(release_year).transpose()?,
            release_date: req.release_date,
            genres: req.genres.map(genres).transpose()?,
            directors: req
                .directors
                .map(|v| text_list("directors", v))
                .transpose()?,
            actors: req.actors.map(|v| text_list("actors", v)).transpose()?,
            cover_image: req
                .cover_image
                .map(|s| text("coverImage", s))
                .transpose()?,
            price: req.price.map(price).transpose()?,
        })
    }
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field present in the patch.
    pub fn apply(self, movie: &mut Movie) {
        if let Some(name) = self.name {
            movie.name = name.into_string();
        }
        if let Some(description) = self.description {
            movie.description = description;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(ratings) = self.ratings {
            movie.ratings = Some(ratings);
        }
        if let Some(total_rating) = self.total_rating {
            movie.total_rating = Some(total_rating);
        }
        if let Some(release_year) = self.release_year {
            movie.release_year = release_year;
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = Some(release_date);
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
        if let Some(directors) = self.directors {
            movie.directors = directors;
        }
        if let Some(actors) = self.actors {
            movie.actors = actors;
        }
        if let Some(cover_image) = self.cover_image {
            movie.cover_image = Some(cover_image);
        }
        if let Some(price) = self.price {
            movie.price = price;
        }
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required { field })
}

fn text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn text_list(field: &'static str, values: Vec<String>) -> Result<Vec<String>, ValidationError> {
    values.into_iter().map(|v| text(field, v)).collect()
}

/// Genres behave as a set: duplicates collapse, first occurrence wins.
fn genres(values: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for genre in text_list("genres", values)? {
        if !out.contains(&genre) {
            out.push(genre);
        }
    }
    if out.is_empty() {
        return Err(ValidationError::OutOfRange {
            field: "genres",
            reason: "must contain at least one genre",
        });
    }
    Ok(out)
}

fn duration(value: i32) -> Result<i32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "duration",
            reason: "must be greater than 0",
        });
    }
    Ok(value)
}

fn ratings(value: f64) -> Result<f64, ValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "ratings",
            reason: "must be between 1 and 10",
        });
    }
    Ok(value)
}

fn total_rating(value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: "totalRating",
            reason: "must not be negative",
        });
    }
    Ok(value)
}

fn release_year(value: i32) -> Result<i32, ValidationError> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "releaseYear",
            reason: "must be between 1888 and 9999",
        });
    }
    Ok(value)
}

fn price(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price",
            reason: "must not be negative",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateMovieRequest {
        CreateMovieRequest {
            name: Some("  Inception ".into()),
            description: Some("Dreams within dreams".into()),
            duration: Some(148),
            ratings: Some(8.8),
            release_year: Some(2010),
            genres: Some(vec!["Sci-Fi".into(), " Thriller".into(), "Sci-Fi".into()]),
            price: Some(12.5),
            ..Default::default()
        }
    }

    fn stored_movie() -> Movie {
        Movie {
            id: Uuid::new_v4(),
            name: "Inception".into(),
            description: "Dreams within dreams".into(),
            duration: 148,
            ratings: Some(8.8),
            total_rating: None,
            release_year: 2010,
            release_date: None,
            genres: vec!["Sci-Fi".into()],
            directors: vec![],
            actors: vec![],
            cover_image: None,
            price: 12.5,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_normalizes_fields() {
        let movie = NewMovie::try_from(create_request()).unwrap();
        assert_eq!(movie.name.as_str(), "Inception");
        assert_eq!(movie.genres, vec!["Sci-Fi", "Thriller"]);
        assert!(movie.directors.is_empty());
    }

    #[test]
    fn create_requires_price() {
        let req = CreateMovieRequest {
            price: None,
            ..create_request()
        };
        let err = NewMovie::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "price" });
        assert_eq!(err.to_string(), "price is a required field");
    }

    #[test]
    fn create_rejects_rating_out_of_range() {
        let req = CreateMovieRequest {
            ratings: Some(11.0),
            ..create_request()
        };
        let err = NewMovie::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "ratings", .. }));
    }

    #[test]
    fn create_rejects_empty_genres() {
        let req = CreateMovieRequest {
            genres: Some(vec![]),
            ..create_request()
        };
        let err = NewMovie::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "genres", .. }));

        let req = CreateMovieRequest {
            genres: Some(vec!["  ".into()]),
            ..create_request()
        };
        let err = NewMovie::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "genres" });
    }

    #[test]
    fn create_rejects_nan_price() {
        let req = CreateMovieRequest {
            price: Some(f64::NAN),
            ..create_request()
        };
        assert!(NewMovie::try_from(req).is_err());
    }

    #[test]
    fn patch_runs_validators() {
        let req = UpdateMovieRequest {
            duration: Some(0),
            ..Default::default()
        };
        let err = MoviePatch::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "duration", .. }));
    }

    #[test]
    fn empty_patch_is_noop() {
        let patch = MoviePatch::try_from(UpdateMovieRequest::default()).unwrap();
        assert!(patch.is_empty());

        let mut movie = stored_movie();
        let before = movie.clone();
        patch.apply(&mut movie);
        assert_eq!(movie, before);
    }

    #[test]
    fn patch_overwrites_present_fields_only() {
        let req = UpdateMovieRequest {
            price: Some(3.0),
            genres: Some(vec!["Drama".into(), "Drama".into()]),
            ..Default::default()
        };
        let patch = MoviePatch::try_from(req).unwrap();

        let mut movie = stored_movie();
        patch.apply(&mut movie);
        assert_eq!(movie.price, 3.0);
        assert_eq!(movie.genres, vec!["Drama"]);
        assert_eq!(movie.name, "Inception");
        assert_eq!(movie.ratings, Some(8.8));
    }

    #[test]
    fn movie_serializes_camel_case() {
        let json = serde_json::to_value(stored_movie()).unwrap();
        assert!(json.get("releaseYear").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("release_year").is_none());
    }
}
