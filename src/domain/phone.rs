//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_LENGTH: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time and
/// on every later assignment.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.value(), "0501234567");
/// assert!(Phone::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Every character is an ASCII digit (no spaces, `+`, or separators)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    type Checked = ();

    fn validate(candidate: &str) -> Result<(), ValidationError> {
        let valid = candidate.len() == PHONE_LENGTH
            && candidate.chars().all(|c| c.is_ascii_digit());

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(candidate.to_string()))
        }
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

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.value(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("12345").is_err());
        assert!(Phone::new("05012345678").is_err());
        assert!(Phone::new("050-123-45").is_err());
        assert!(Phone::new("+380501234").is_err());
        assert!(Phone::new("050123456a").is_err());
        assert!(Phone::new("０５０１２３４５６７").is_err());
        assert!(Phone::new("1234567890").is_ok());
    }

    #[test]
    fn test_phone_error_carries_raw_value() {
        assert_eq!(
            Phone::new("12345"),
            Err(ValidationError::InvalidPhone("12345".to_string()))
        );
    }

    #[test]
    fn test_phone_set_value_keeps_old_on_failure() {
        let mut phone = Phone::new("0501234567").unwrap();
        assert!(phone.set_value("bad").is_err());
        assert_eq!(phone.value(), "0501234567");

        phone.set_value("0679876543").unwrap();
        assert_eq!(phone.value(), "0679876543");
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "0501234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_ten_digit_strings_are_preserved(s in "[0-9]{10}") {
            let phone = Phone::new(s.clone()).unwrap();
            prop_assert_eq!(phone.value(), s.as_str());
        }

        #[test]
        fn prop_wrong_length_is_rejected(s in "[0-9]{0,9}|[0-9]{11,20}") {
            prop_assert_eq!(
                Phone::new(s.clone()),
                Err(ValidationError::InvalidPhone(s))
            );
        }

        #[test]
        fn prop_non_digit_is_rejected(
            prefix in "[0-9]{0,9}",
            bad in "[^0-9]"
        ) {
            let mut s = prefix;
            s.push_str(&bad);
            while s.chars().count() < PHONE_LENGTH {
                s.push('0');
            }
            prop_assert!(Phone::new(s).is_err());
        }
    }
}
