use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::SearchFilters;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for contact operations.
///
/// Thin orchestration over the repository: the owner scope travels through
/// unchanged, absent rows become `NotFound`, and empty search filters
/// degrade to a plain list.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    /// Create a new contact service with an injected repository.
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn list_contacts(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        self.repository.list(owner, limit, offset).await
    }

    async fn get_contact(&self, id: ContactId, owner: UserId) -> Result<Contact, ContactError> {
        self.repository
            .find_by_id(id, owner)
            .await?
            .ok_or(ContactError::NotFound(id.as_i64()))
    }

    async fn create_contact(
        &self,
        fields: ContactFields,
        owner: UserId,
    ) -> Result<Contact, ContactError> {
        let contact = self.repository.create(fields, owner).await?;

        tracing::info!(
            contact_id = %contact.id,
            owner_id = %owner,
            "Contact created"
        );

        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        owner: UserId,
        fields: ContactFields,
    ) -> Result<Contact, ContactError> {
        self.repository
            .update(id, owner, fields)
            .await?
            .ok_or(ContactError::NotFound(id.as_i64()))
    }

    async fn delete_contact(&self, id: ContactId, owner: UserId) -> Result<Contact, ContactError> {
        let deleted = self
            .repository
            .delete(id, owner)
            .await?
            .ok_or(ContactError::NotFound(id.as_i64()))?;

        tracing::info!(contact_id = %id, owner_id = %owner, "Contact deleted");

        Ok(deleted)
    }

    async fn search_contacts(
        &self,
        filters: SearchFilters,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        if filters.is_empty() {
            return self.repository.list(owner, limit, offset).await;
        }

        self.repository.search(filters, owner, limit, offset).await
    }

    async fn upcoming_birthdays(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        let today = Utc::now().date_naive();
        self.repository.upcoming_birthdays(owner, today).await
    }
}
