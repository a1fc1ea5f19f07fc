//! Storage layer for saved address books.
//!
//! The address book persists through the [`ProjectionStore`] trait, so tests
//! and alternate backends can stand in for the bincode file.

pub mod bincode_store;
pub mod traits;

pub use bincode_store::BincodeFileStore;
pub use traits::ProjectionStore;
