//! Record model representing one contact.

use super::projection::RecordProjection;
use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A contact: a name, an optional birthday, and an ordered list of phones.
///
/// Phones may repeat; nothing de-duplicates them unless `remove_phone` is
/// called for that value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    birthday: Option<Birthday>,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with a name, no birthday, and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            birthday: None,
            phones: Vec::new(),
        }
    }

    /// Create a record with a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` does not parse.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Set or replace the birthday. The previous birthday survives a failure.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set_value(raw),
            None => {
                self.birthday = Some(Birthday::new(raw)?);
                Ok(())
            }
        }
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// First phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == value)
    }

    /// Remove every phone equal to `value`. Does nothing if none match.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.value() != value);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    /// - `RecordError::Validation` if `new` is not a valid phone
    ///
    /// The phone list is unchanged on either error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|phone| phone.value() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        phone.set_value(new)?;
        Ok(())
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` if the record has no birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month/day.
    ///
    /// The birthday's own year is ignored. A birthday falling on `today` is 0
    /// days away; one that already passed this year rolls over to next year,
    /// so the result is always in `0..=366`. A 29 February birthday is
    /// observed on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let (month, day) = (birthday.month(), birthday.day());

        let upcoming_this_year =
            month > today.month() || (month == today.month() && day >= today.day());
        let year = if upcoming_this_year {
            today.year()
        } else {
            today.year() + 1
        };

        let next = NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))?;

        Some((next - today).num_days())
    }

    /// Persistence-ready snapshot (name and phones, no birthday).
    pub fn to_projection(&self) -> RecordProjection {
        RecordProjection {
            name: self.name.value().to_string(),
            phones: self
                .phones
                .iter()
                .map(|phone| phone.value().to_string())
                .collect(),
        }
    }

    /// Human-readable summary, e.g. `Contact name: Alice, phones: 0501234567`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|phone| phone.value()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

/// Rebuild a record from a loaded projection, re-validating every phone.
impl TryFrom<RecordProjection> for Record {
    type Error = ValidationError;

    fn try_from(projection: RecordProjection) -> Result<Self, Self::Error> {
        let mut record = Record::new(projection.name);
        for phone in projection.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}
