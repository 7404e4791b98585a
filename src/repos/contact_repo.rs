/*
 * Responsibility
 * - contacts テーブル向け SQLx 操作 (DocumentStore 実装)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Document, DocumentStore};

#[derive(Debug, Clone, FromRow)]
pub struct ContactRow {
    #[sqlx(rename = "contactId")]
    pub id: Uuid,
    #[sqlx(rename = "name")]
    pub name: String,
    #[sqlx(rename = "dob")]
    pub dob: String,
    #[sqlx(rename = "phone")]
    pub phone: String,
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewContact {
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub user_id: Uuid,
}

#[derive(Debug, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub phone: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.dob.is_none() && self.phone.is_none()
    }
}

impl Document for ContactRow {
    type Draft = NewContact;
    type Patch = ContactPatch;
}

pub struct PgContactStore {
    db: PgPool,
}

impl PgContactStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore<ContactRow> for PgContactStore {
    async fn insert(&self, draft: NewContact) -> Result<ContactRow, RepoError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts ("name", "dob", "phone", "userId")
            VALUES ($1, $2, $3, $4)
            RETURNING "contactId", "name", "dob", "phone", "userId", "createdAt"
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.dob)
        .bind(&draft.phone)
        .bind(draft.user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ContactRow>, RepoError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT "contactId", "name", "dob", "phone", "userId", "createdAt"
            FROM contacts
            ORDER BY "createdAt" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactRow>, RepoError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT "contactId", "name", "dob", "phone", "userId", "createdAt"
            FROM contacts
            WHERE "contactId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: ContactPatch) -> Result<Option<ContactRow>, RepoError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET
                "name" = COALESCE($2, "name"),
                "dob" = COALESCE($3, "dob"),
                "phone" = COALESCE($4, "phone")
            WHERE "contactId" = $1
            RETURNING "contactId", "name", "dob", "phone", "userId", "createdAt"
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.dob)
        .bind(patch.phone)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE "contactId" = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
