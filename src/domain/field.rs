//! The validated field abstraction shared by all contact fields.

use super::errors::ValidationError;
use std::fmt;

/// A named scalar value guarded by a validation rule.
///
/// Validation is a standalone step (`validate`) so the rule can be exercised
/// without constructing or mutating a field. Constructors and `set_value` are
/// thin wrappers that run the rule and only then store the candidate.
pub trait Field: fmt::Display + Sized {
    /// What a successful validation yields (e.g. the parsed date for birthdays).
    type Checked;

    /// Check a candidate value against this field's rule.
    fn validate(candidate: &str) -> Result<Self::Checked, ValidationError>;

    /// Current value as a string slice.
    fn value(&self) -> &str;

    /// Replace the value after re-validating it.
    ///
    /// On failure the previous value is left untouched.
    fn set_value(&mut self, candidate: impl Into<String>) -> Result<(), ValidationError>;
}
