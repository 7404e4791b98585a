/*
 * Responsibility
 * - profiles テーブル向け SQLx 操作 (DocumentStore 実装)
 * - "avatarUrl" は nullable。patch は tri-state (触らない / NULL にする / 値を入れる)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Document, DocumentStore};

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    #[sqlx(rename = "profileId")]
    pub id: Uuid,
    #[sqlx(rename = "name")]
    pub name: String,
    #[sqlx(rename = "bio")]
    pub bio: Option<String>,
    #[sqlx(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewProfile {
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub user_id: Uuid,
}

#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    // avatar_url: Some(Some(v)) -> set to v
    // avatar_url: Some(None)    -> set to NULL
    // avatar_url: None          -> do not update
    pub avatar_url: Option<Option<String>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.avatar_url.is_none()
    }
}

impl Document for ProfileRow {
    type Draft = NewProfile;
    type Patch = ProfilePatch;
}

pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore<ProfileRow> for PgProfileStore {
    async fn insert(&self, draft: NewProfile) -> Result<ProfileRow, RepoError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles ("name", "bio", "avatarUrl", "userId")
            VALUES ($1, $2, $3, $4)
            RETURNING "profileId", "name", "bio", "avatarUrl", "userId", "createdAt"
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.bio)
        .bind(&draft.avatar_url)
        .bind(draft.user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ProfileRow>, RepoError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT "profileId", "name", "bio", "avatarUrl", "userId", "createdAt"
            FROM profiles
            ORDER BY "createdAt" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ProfileRow>, RepoError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT "profileId", "name", "bio", "avatarUrl", "userId", "createdAt"
            FROM profiles
            WHERE "profileId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: ProfilePatch) -> Result<Option<ProfileRow>, RepoError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET
                "name" = COALESCE($2, "name"),
                "bio" = COALESCE($3, "bio"),
                "avatarUrl" = CASE
                    WHEN $4 = false THEN "avatarUrl"
                    ELSE $5
                END
            WHERE "profileId" = $1
            RETURNING "profileId", "name", "bio", "avatarUrl", "userId", "createdAt"
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.bio)
        .bind(patch.avatar_url.is_some()) // $4: flag to set avatar_url
        .bind(patch.avatar_url.flatten()) // $5: new avatar_url value
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM profiles
            WHERE "profileId" = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
