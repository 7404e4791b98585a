/*
 * Responsibility
 * - decks テーブル向け SQLx 操作 (DocumentStore 実装)
 * - 更新時は "updatedAt" を now() に進める
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Document, DocumentStore};

#[derive(Debug, Clone, FromRow)]
pub struct DeckRow {
    #[sqlx(rename = "deckId")]
    pub id: Uuid,
    #[sqlx(rename = "name")]
    pub name: String,
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewDeck {
    pub name: String,
    pub user_id: Uuid,
}

#[derive(Debug, Default)]
pub struct DeckPatch {
    pub name: Option<String>,
}

impl DeckPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl Document for DeckRow {
    type Draft = NewDeck;
    type Patch = DeckPatch;
}

pub struct PgDeckStore {
    db: PgPool,
}

impl PgDeckStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore<DeckRow> for PgDeckStore {
    async fn insert(&self, draft: NewDeck) -> Result<DeckRow, RepoError> {
        let row = sqlx::query_as::<_, DeckRow>(
            r#"
            INSERT INTO decks ("name", "userId")
            VALUES ($1, $2)
            RETURNING "deckId", "name", "userId", "updatedAt"
            "#,
        )
        .bind(&draft.name)
        .bind(draft.user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<DeckRow>, RepoError> {
        let rows = sqlx::query_as::<_, DeckRow>(
            r#"
            SELECT "deckId", "name", "userId", "updatedAt"
            FROM decks
            ORDER BY "updatedAt" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<DeckRow>, RepoError> {
        let row = sqlx::query_as::<_, DeckRow>(
            r#"
            SELECT "deckId", "name", "userId", "updatedAt"
            FROM decks
            WHERE "deckId" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: DeckPatch) -> Result<Option<DeckRow>, RepoError> {
        let row = sqlx::query_as::<_, DeckRow>(
            r#"
            UPDATE decks
            SET
                "name" = COALESCE($2, "name"),
                "updatedAt" = now()
            WHERE "deckId" = $1
            RETURNING "deckId", "name", "userId", "updatedAt"
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM decks
            WHERE "deckId" = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
