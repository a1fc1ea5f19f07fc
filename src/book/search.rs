//! Substring search results.

use crate::models::Record;

/// One record matched by [`AddressBook::matches_substring`](super::AddressBook::matches_substring).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookMatch<'a> {
    /// Key the record is stored under
    pub name: &'a str,

    /// The matched record
    pub record: &'a Record,
}

/// Case-insensitive containment of an already lowercased `needle`.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
