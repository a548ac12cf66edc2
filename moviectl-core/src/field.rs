//! Closed set of movie fields addressable from query strings.
//!
//! Every SQL identifier the server emits comes from [`MovieField::column`];
//! user input only ever selects one of these variants.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Storage type of a field, drives value parsing and allowed operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Uuid,
    Text,
    Integer,
    Float,
    Date,
    Timestamp,
    TextList,
}

impl FieldKind {
    /// Human description used in invalid-value messages.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Uuid => "a UUID",
            Self::Text | Self::TextList => "text",
            Self::Integer => "an integer",
            Self::Float => "a number",
            Self::Date => "a date (YYYY-MM-DD)",
            Self::Timestamp => "an RFC 3339 timestamp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Id,
    Name,
    Description,
    Duration,
    Ratings,
    TotalRating,
    ReleaseYear,
    ReleaseDate,
    Genres,
    Directors,
    Actors,
    CoverImage,
    Price,
    CreatedAt,
}

impl MovieField {
    /// All fields in serialization order
    pub const ALL: [MovieField; 14] = [
        Self::Id,
        Self::Name,
        Self::Description,
        Self::Duration,
        Self::Ratings,
        Self::TotalRating,
        Self::ReleaseYear,
        Self::ReleaseDate,
        Self::Genres,
        Self::Directors,
        Self::Actors,
        Self::CoverImage,
        Self::Price,
        Self::CreatedAt,
    ];

    /// Name used in JSON bodies and query strings.
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Duration => "duration",
            Self::Ratings => "ratings",
            Self::TotalRating => "totalRating",
            Self::ReleaseYear => "releaseYear",
            Self::ReleaseDate => "releaseDate",
            Self::Genres => "genres",
            Self::Directors => "directors",
            Self::Actors => "actors",
            Self::CoverImage => "coverImage",
            Self::Price => "price",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Column name in the `movies` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Duration => "duration",
            Self::Ratings => "ratings",
            Self::TotalRating => "total_rating",
            Self::ReleaseYear => "release_year",
            Self::ReleaseDate => "release_date",
            Self::Genres => "genres",
            Self::Directors => "directors",
            Self::Actors => "actors",
            Self::CoverImage => "cover_image",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Id => FieldKind::Uuid,
            Self::Name | Self::Description | Self::CoverImage => FieldKind::Text,
            Self::Duration | Self::TotalRating | Self::ReleaseYear => FieldKind::Integer,
            Self::Ratings | Self::Price => FieldKind::Float,
            Self::ReleaseDate => FieldKind::Date,
            Self::CreatedAt => FieldKind::Timestamp,
            Self::Genres | Self::Directors | Self::Actors => FieldKind::TextList,
        }
    }

    pub fn is_sortable(self) -> bool {
        self.kind() != FieldKind::TextList
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.api_name() == name)
    }
}

impl FromStr for MovieField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_api_name(s).ok_or_else(|| QueryError::UnknownField(s.to_owned()))
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}
