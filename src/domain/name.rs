//! Name field.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name.
///
/// Names carry no constraint beyond being a string; the type exists so a
/// record's key is never confused with an arbitrary string.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("Alice");
/// assert_eq!(name.value(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Every value is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    type Checked = ();

    fn validate(_candidate: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, candidate: impl Into<String>) -> Result<(), ValidationError> {
        let candidate = candidate.into();
        Self::validate(&candidate)?;
        self.0 = candidate;
        Ok(())
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
