//! Data models for the contact book.
//!
//! This module contains the contact record and its persistence-ready projection.

pub mod projection;
pub mod record;

pub use projection::RecordProjection;
pub use record::Record;
