//! Movie name validation
//!
//! Names are trimmed before any check, and length is counted in characters.

use serde::Serialize;

use super::ValidationError;

const MIN_NAME_LEN: usize = 4;
const MAX_NAME_LEN: usize = 100;

/// Validated, trimmed movie name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieName(String);

impl MovieName {
    /// Create a movie name, trimming surrounding whitespace.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - 4 to 100 characters
    ///
    /// # Example
    /// ```
    /// use moviectl_core::MovieName;
    ///
    /// assert_eq!(MovieName::new("  Heat ").unwrap().as_str(), "Heat");
    /// assert!(MovieName::new("Up").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        let len = trimmed.chars().count();
        if len < MIN_NAME_LEN {
            return Err(ValidationError::TooShort {
                field: "name",
                min: MIN_NAME_LEN,
            });
        }
        if len > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MovieName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = MovieName::new("  The Matrix\n").unwrap();
        assert_eq!(name.as_str(), "The Matrix");
    }

    #[test]
    fn rejects_blank() {
        let err = MovieName::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn min_length_after_trim() {
        assert!(MovieName::new("Heat").is_ok());
        let err = MovieName::new(" Up  ").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { min: 4, .. }));
    }

    #[test]
    fn max_length_counts_chars() {
        let name_100 = "é".repeat(100);
        assert!(MovieName::new(&name_100).is_ok());

        let name_101 = "a".repeat(101);
        let err = MovieName::new(&name_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }
}
