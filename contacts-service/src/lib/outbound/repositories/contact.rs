use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::birthday_window_month_days;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactFields;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::FirstName;
use crate::domain::contact::models::LastName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::models::SearchFilters;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: NaiveDate,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_contact(self) -> Result<Contact, ContactError> {
        Ok(Contact {
            id: ContactId(self.id),
            first_name: FirstName::new(self.first_name).map_err(ContactError::InvalidFirstName)?,
            last_name: LastName::new(self.last_name).map_err(ContactError::InvalidLastName)?,
            email: EmailAddress::new(self.email)?,
            phone: PhoneNumber::from_stored(self.phone),
            date_of_birth: self.date_of_birth,
            owner: UserId(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn collect_contacts(rows: Vec<ContactRow>) -> Result<Vec<Contact>, ContactError> {
    rows.into_iter().map(ContactRow::into_contact).collect()
}

fn map_unique_violation(e: sqlx::Error, fields: &ContactFields) -> ContactError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("contacts_email_key") {
                return ContactError::EmailAlreadyExists(fields.email.as_str().to_string());
            }
            if db_err.constraint() == Some("contacts_phone_key") {
                return ContactError::PhoneAlreadyExists(fields.phone.as_str().to_string());
            }
        }
    }
    ContactError::DatabaseError(e.to_string())
}

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn list(
        &self,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, date_of_birth,
                   user_id, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner.as_i64())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        collect_contacts(rows)
    }

    async fn find_by_id(
        &self,
        id: ContactId,
        owner: UserId,
    ) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, date_of_birth,
                   user_id, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        row.map(ContactRow::into_contact).transpose()
    }

    async fn create(&self, fields: ContactFields, owner: UserId) -> Result<Contact, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone, date_of_birth, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, phone, date_of_birth,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(fields.first_name.as_str())
        .bind(fields.last_name.as_str())
        .bind(fields.email.as_str())
        .bind(fields.phone.as_str())
        .bind(fields.date_of_birth)
        .bind(owner.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &fields))?;

        row.into_contact()
    }

    async fn update(
        &self,
        id: ContactId,
        owner: UserId,
        fields: ContactFields,
    ) -> Result<Option<Contact>, ContactError> {
        // The owner is part of the predicate: updating another owner's
        // contact matches zero rows and reveals nothing.
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6,
                date_of_birth = $7, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, first_name, last_name, email, phone, date_of_birth,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(fields.first_name.as_str())
        .bind(fields.last_name.as_str())
        .bind(fields.email.as_str())
        .bind(fields.phone.as_str())
        .bind(fields.date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &fields))?;

        row.map(ContactRow::into_contact).transpose()
    }

    async fn delete(
        &self,
        id: ContactId,
        owner: UserId,
    ) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND user_id = $2
            RETURNING id, first_name, last_name, email, phone, date_of_birth,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        row.map(ContactRow::into_contact).transpose()
    }

    async fn search(
        &self,
        filters: SearchFilters,
        owner: UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, date_of_birth,
                   user_id, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
              AND ($2::varchar IS NULL OR first_name = $2)
              AND ($3::varchar IS NULL OR last_name = $3)
              AND ($4::varchar IS NULL OR email = $4)
            ORDER BY id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(owner.as_i64())
        .bind(filters.first_name)
        .bind(filters.last_name)
        .bind(filters.email)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        collect_contacts(rows)
    }

    async fn upcoming_birthdays(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, ContactError> {
        let window = birthday_window_month_days(today);

        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, date_of_birth,
                   user_id, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
              AND to_char(date_of_birth, 'MM-DD') = ANY($2)
            ORDER BY id
            "#,
        )
        .bind(owner.as_i64())
        .bind(&window)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        collect_contacts(rows)
    }
}
