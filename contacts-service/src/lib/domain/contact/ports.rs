use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::SearchFilters;
use crate::domain::user::models::UserId;

/// Port for contact domain service operations.
///
/// Every operation takes the owning user as a mandatory scope parameter;
/// no operation returns or mutates another owner's contacts.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// List contacts owned by `owner`, paginated.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_contacts(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Retrieve a single contact owned by `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No contact with this id owned by `owner`
    /// * `DatabaseError` - Database operation failed
    async fn get_contact(&self, id: ContactId, owner: UserId) -> Result<Contact, ContactError>;

    /// Create a contact owned by `owner`.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `PhoneAlreadyExists` - Unique field taken
    /// * `DatabaseError` - Database operation failed
    async fn create_contact(
        &self,
        fields: ContactFields,
        owner: UserId,
    ) -> Result<Contact, ContactError>;

    /// Replace the attributes of a contact owned by `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No contact with this id owned by `owner` (existence
    ///   of another owner's contact with the same id is not revealed)
    /// * `EmailAlreadyExists` / `PhoneAlreadyExists` - Unique field taken
    /// * `DatabaseError` - Database operation failed
    async fn update_contact(
        &self,
        id: ContactId,
        owner: UserId,
        fields: ContactFields,
    ) -> Result<Contact, ContactError>;

    /// Delete a contact owned by `owner`. Deletion is immediate.
    ///
    /// # Returns
    /// The deleted contact
    ///
    /// # Errors
    /// * `NotFound` - No contact with this id owned by `owner`
    /// * `DatabaseError` - Database operation failed
    async fn delete_contact(&self, id: ContactId, owner: UserId) -> Result<Contact, ContactError>;

    /// Exact-match search within the owner's contacts.
    ///
    /// An empty filter set degrades to `list_contacts`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_contacts(
        &self,
        filters: SearchFilters,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Contacts whose birthday (month-day, year-independent) falls within
    /// the inclusive 7-day window starting today.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upcoming_birthdays(&self, owner: UserId) -> Result<Vec<Contact>, ContactError>;
}

/// Persistence operations for the contact aggregate.
///
/// The owner id is part of every query predicate; implementations never
/// trust a contact's embedded owner without re-checking the scope
/// parameter in the store.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Retrieve up to `limit` contacts owned by `owner`, skipping
    /// `offset`, ordered by id ascending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Retrieve a contact by id, scoped to `owner`.
    ///
    /// # Returns
    /// Optional contact entity (None if not owned by `owner`)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(
        &self,
        id: ContactId,
        owner: UserId,
    ) -> Result<Option<Contact>, ContactError>;

    /// Persist a new contact owned by `owner`.
    ///
    /// # Returns
    /// Stored entity with store-assigned id and timestamps
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `PhoneAlreadyExists` - Unique field taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, fields: ContactFields, owner: UserId) -> Result<Contact, ContactError>;

    /// Replace the attributes of a contact scoped to `owner`.
    ///
    /// # Returns
    /// The updated contact, or None if not owned by `owner`
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `PhoneAlreadyExists` - Unique field taken
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: ContactId,
        owner: UserId,
        fields: ContactFields,
    ) -> Result<Option<Contact>, ContactError>;

    /// Remove a contact scoped to `owner`.
    ///
    /// # Returns
    /// The removed contact, or None if not owned by `owner`
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: ContactId, owner: UserId)
        -> Result<Option<Contact>, ContactError>;

    /// Exact-match search combined with the owner scope via AND.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search(
        &self,
        filters: SearchFilters,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Contacts owned by `owner` whose birth month-day falls within the
    /// inclusive window [today, today + 7], handling year-end wraparound.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upcoming_birthdays(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, ContactError>;
}
