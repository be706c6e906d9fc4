use std::fmt;

use chrono::DateTime;
use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::contact::errors::NameError;
use crate::domain::contact::errors::PhoneError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Number of days after today covered by the upcoming-birthdays window
/// (the window is [today, today + 7], inclusive on both ends).
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// Contact aggregate entity.
///
/// Every contact belongs to exactly one owning user and is only ever read
/// or mutated through operations scoped to that owner.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub date_of_birth: NaiveDate,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact unique identifier type (store-assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub i64);

impl ContactId {
    /// Get the raw numeric identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First name value type (3-25 characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstName(String);

impl FirstName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 25;

    /// Create a new validated first name.
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 3-25 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        validate_length(name, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Last name value type (3-50 characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new validated last name.
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 3-50 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        validate_length(name, Self::MIN_LENGTH, Self::MAX_LENGTH).map(Self)
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn validate_length(name: String, min: usize, max: usize) -> Result<String, NameError> {
    let length = name.chars().count();
    if length < min {
        Err(NameError::TooShort {
            min,
            actual: length,
        })
    } else if length > max {
        Err(NameError::TooLong {
            max,
            actual: length,
        })
    } else {
        Ok(name)
    }
}

/// Phone number value type.
///
/// Accepts exactly 10 ASCII digits and stores them normalized behind the
/// fixed `+38` international prefix (e.g. `0501234567` -> `+380501234567`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const COUNTRY_PREFIX: &'static str = "+38";
    const DIGITS: usize = 10;

    /// Normalize a raw phone input.
    ///
    /// # Errors
    /// * `InvalidFormat` - Input is not exactly 10 ASCII digits
    pub fn new(phone: &str) -> Result<Self, PhoneError> {
        if phone.len() == Self::DIGITS && phone.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(format!("{}{}", Self::COUNTRY_PREFIX, phone)))
        } else {
            Err(PhoneError::InvalidFormat)
        }
    }

    /// Rehydrate an already-normalized number read back from the store.
    pub fn from_stored(phone: String) -> Self {
        Self(phone)
    }

    /// Get the normalized number as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated user-supplied contact attributes for create and full update.
#[derive(Debug, Clone)]
pub struct ContactFields {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub date_of_birth: NaiveDate,
}

/// Exact-match search filters, combined with the owner scope via AND.
///
/// An empty filter set degrades to a plain list.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Month-day keys ("MM-DD") for the inclusive birthday window
/// [today, today + 7].
///
/// Iterates real calendar dates, so a window that spans a year end (e.g.
/// Dec 29 -> Jan 5) yields both the December and the January month-days;
/// comparison against a birth date is year-independent.
pub fn birthday_window_month_days(today: NaiveDate) -> Vec<String> {
    (0..=BIRTHDAY_WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| format!("{:02}-{:02}", date.month(), date.day()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_length_bounds() {
        assert!(FirstName::new("Ann".to_string()).is_ok());
        assert!(matches!(
            FirstName::new("An".to_string()),
            Err(NameError::TooShort { min: 3, actual: 2 })
        ));
        assert!(matches!(
            FirstName::new("a".repeat(26)),
            Err(NameError::TooLong { max: 25, actual: 26 })
        ));
    }

    #[test]
    fn test_last_name_length_bounds() {
        assert!(LastName::new("Lee".to_string()).is_ok());
        assert!(LastName::new("a".repeat(50)).is_ok());
        assert!(matches!(
            LastName::new("a".repeat(51)),
            Err(NameError::TooLong { max: 50, actual: 51 })
        ));
    }

    #[test]
    fn test_phone_normalization() {
        let phone = PhoneNumber::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        // 9 and 11 digits are both invalid before normalization
        assert!(matches!(
            PhoneNumber::new("050123456"),
            Err(PhoneError::InvalidFormat)
        ));
        assert!(matches!(
            PhoneNumber::new("05012345678"),
            Err(PhoneError::InvalidFormat)
        ));
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(matches!(
            PhoneNumber::new("05012345ab"),
            Err(PhoneError::InvalidFormat)
        ));
        assert!(matches!(
            PhoneNumber::new("+380501234"),
            Err(PhoneError::InvalidFormat)
        ));
    }

    #[test]
    fn test_birthday_window_mid_year() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
        let window = birthday_window_month_days(today);

        assert_eq!(window.len(), 8);
        assert!(window.contains(&"06-29".to_string()));
        assert!(window.contains(&"06-30".to_string()));
        assert!(window.contains(&"07-06".to_string()));
        assert!(!window.contains(&"06-20".to_string()));
        assert!(!window.contains(&"07-07".to_string()));
    }

    #[test]
    fn test_birthday_window_wraps_year_end() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
        let window = birthday_window_month_days(today);

        assert_eq!(window.len(), 8);
        assert!(window.contains(&"12-29".to_string()));
        assert!(window.contains(&"12-31".to_string()));
        assert!(window.contains(&"01-01".to_string()));
        assert!(window.contains(&"01-05".to_string()));
        assert!(!window.contains(&"01-06".to_string()));
    }

    #[test]
    fn test_birthday_window_includes_leap_day_in_leap_year() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let window = birthday_window_month_days(today);

        assert!(window.contains(&"02-29".to_string()));
        assert!(window.contains(&"03-04".to_string()));
    }
}
