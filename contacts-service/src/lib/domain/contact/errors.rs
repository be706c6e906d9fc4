use thiserror::Error;

use crate::domain::user::errors::EmailError;

/// Error for contact name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for phone number validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Invalid phone format. Phone must be 10 digits.")]
    InvalidFormat,
}

/// Top-level error for all contact-related operations
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    // Value object validation errors
    #[error("Invalid first name: {0}")]
    InvalidFirstName(NameError),

    #[error("Invalid last name: {0}")]
    InvalidLastName(NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    // Domain-level errors
    #[error("Contact not found: {0}")]
    NotFound(i64),

    #[error("Contact email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Contact phone already exists: {0}")]
    PhoneAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
