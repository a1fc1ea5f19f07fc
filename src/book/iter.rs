//! Borrowing iterator over an address book.

use crate::models::Record;
use std::iter::FusedIterator;

/// Iterator over the records of an [`AddressBook`](super::AddressBook) in
/// insertion order.
///
/// Each call to `AddressBook::iter` creates a fresh cursor; the book itself
/// holds no iteration state, so traversals can be nested or repeated freely.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: indexmap::map::Values<'a, String, Record>,
}

impl<'a> Records<'a> {
    pub(crate) fn new(inner: indexmap::map::Values<'a, String, Record>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Records<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}
