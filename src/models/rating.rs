// src/models/rating.rs
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Star count of a rating, always within 1..=5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::StarsOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub stars: Stars,
    #[serde(default)]
    pub comment: String, // Free text, may be empty
}

impl Rating {
    pub fn new(stars: u8, comment: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            stars: Stars::new(stars)?,
            comment: comment.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_accept_only_one_to_five() {
        assert!(Stars::new(1).is_ok());
        assert!(Stars::new(5).is_ok());
        assert_eq!(Stars::new(0), Err(ValidationError::StarsOutOfRange(0)));
        assert_eq!(Stars::new(6), Err(ValidationError::StarsOutOfRange(6)));
    }

    #[test]
    fn deserializing_out_of_range_stars_fails() {
        let parsed: Result<Rating, _> = serde_json::from_str(r#"{"stars":9,"comment":"great"}"#);
        assert!(parsed.is_err());

        let parsed: Rating = serde_json::from_str(r#"{"stars":4}"#).unwrap();
        assert_eq!(parsed.stars.get(), 4);
        assert!(parsed.comment.is_empty());
    }
}
