/*
 * Responsibility
 * - albums テーブル向け SQLx 操作 (DocumentStore 実装)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Document, DocumentStore};

#[derive(Debug, Clone, FromRow)]
pub struct AlbumRow {
    #[sqlx(rename = "albumId")]
    pub id: Uuid,
    #[sqlx(rename = "name")]
    pub name: String,
    #[sqlx(rename = "desc")]
    pub desc: String,
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewAlbum {
    pub name: String,
    pub desc: String,
    pub user_id: Uuid,
}

#[derive(Debug, Default)]
pub struct AlbumPatch {
    pub name: Option<String>,
    pub desc: Option<String>,
}

impl AlbumPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.desc.is_none()
    }
}

impl Document for AlbumRow {
    type Draft = NewAlbum;
    type Patch = AlbumPatch;
}

pub struct PgAlbumStore {
    db: PgPool,
}

impl PgAlbumStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore<AlbumRow> for PgAlbumStore {
    async fn insert(&self, draft: NewAlbum) -> Result<AlbumRow, RepoError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            INSERT INTO albums ("name", "desc", "userId")
            VALUES ($1, $2, $3)
            RETURNING "albumId", "name", "desc", "userId", "createdAt"
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.desc)
        .bind(draft.user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<AlbumRow>, RepoError> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT "albumId", "name", "desc", "userId", "createdAt"
            FROM albums
            ORDER BY "createdAt" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<AlbumRow>, RepoError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT "albumId", "name", "desc", "userId", "createdAt"
            FROM albums
            WHERE "albumId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: AlbumPatch) -> Result<Option<AlbumRow>, RepoError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            UPDATE albums
            SET
                "name" = COALESCE($2, "name"),
                "desc" = COALESCE($3, "desc")
            WHERE "albumId" = $1
            RETURNING "albumId", "name", "desc", "userId", "createdAt"
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.desc)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM albums
            WHERE "albumId" = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
