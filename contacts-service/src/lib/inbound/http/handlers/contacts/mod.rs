use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::contact::errors::NameError;
use crate::domain::contact::errors::PhoneError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::FirstName;
use crate::domain::contact::models::LastName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;

pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod search_contacts;
pub mod update_contact;
pub mod upcoming_birthdays;

/// HTTP request body carrying the full set of contact attributes,
/// used by both create and full update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactBody {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Error)]
enum ParseContactBodyError {
    #[error("Invalid first name: {0}")]
    FirstName(NameError),

    #[error("Invalid last name: {0}")]
    LastName(NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),
}

impl ContactBody {
    fn try_into_fields(self) -> Result<ContactFields, ParseContactBodyError> {
        let first_name =
            FirstName::new(self.first_name).map_err(ParseContactBodyError::FirstName)?;
        let last_name = LastName::new(self.last_name).map_err(ParseContactBodyError::LastName)?;
        let email = EmailAddress::new(self.email)?;
        let phone = PhoneNumber::new(&self.phone)?;

        Ok(ContactFields {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth: self.date_of_birth,
        })
    }
}

impl From<ParseContactBodyError> for ApiError {
    fn from(err: ParseContactBodyError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Contact response body shared by all contact endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.as_i64(),
            first_name: contact.first_name.as_str().to_string(),
            last_name: contact.last_name.as_str().to_string(),
            email: contact.email.as_str().to_string(),
            phone: contact.phone.as_str().to_string(),
            date_of_birth: contact.date_of_birth,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
