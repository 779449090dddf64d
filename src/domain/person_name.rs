//! PersonName value object.

use super::errors::ValidationError;
use crate::validation::is_valid_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A first or last name made only of ASCII letters.
///
/// # Example
///
/// ```
/// use contact_book::domain::PersonName;
///
/// let name = PersonName::new("Jane").unwrap();
/// assert_eq!(name.as_str(), "Jane");
/// assert!(PersonName::new("Jane2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty or whitespace-only
    /// value and `ValidationError::InvalidName` when any character is not an
    /// ASCII letter.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_name(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first letter, uppercased.
    pub fn initial(&self) -> char {
        // Constructor guarantees at least one ASCII letter.
        self.0
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('#')
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
