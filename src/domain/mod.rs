//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from: names,
//! phone numbers, and birthdays. Each field runs its validation rule at
//! construction and on every assignment, so an invalid value can never be
//! represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
