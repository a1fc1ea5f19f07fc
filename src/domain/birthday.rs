//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted birthday layout, e.g. "05 March 1990".
pub const BIRTHDAY_FORMAT: &str = "%d %B %Y";

/// A contact's birthday.
///
/// Keeps the string exactly as it was entered alongside the parsed date, so
/// display round-trips while date arithmetic works on a real calendar value.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::new("05 March 1990").unwrap();
/// assert_eq!(birthday.value(), "05 March 1990");
/// assert_eq!(birthday.month(), 3);
/// assert_eq!(birthday.day(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday by parsing `raw` with [`BIRTHDAY_FORMAT`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not parse.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let date = Self::validate(&raw)?;
        Ok(Self { raw, date })
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl Field for Birthday {
    type Checked = NaiveDate;

    fn validate(candidate: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(candidate, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(candidate.to_string()))
    }

    fn value(&self) -> &str {
        &self.raw
    }

    fn set_value(&mut self, candidate: impl Into<String>) -> Result<(), ValidationError> {
        let candidate = candidate.into();
        let date = Self::validate(&candidate)?;
        self.raw = candidate;
        self.date = date;
        Ok(())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
