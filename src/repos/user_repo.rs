/*
 * Responsibility
 * - users テーブル向けの読み取り境界
 * - bearer-auth middleware が lookup key (findHash) でアカウントを引くためだけに使う
 * - この層からの書き込みはない (read-only)
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "username")]
    pub username: String,
    #[sqlx(rename = "findHash")]
    pub find_hash: String,
}

/// Account lookup boundary for the User Resolver stage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exactly-one semantics: the `findHash` column is unique, so more
    /// than one match cannot happen; zero matches come back as `None`.
    async fn find_by_find_hash(&self, find_hash: &str) -> Result<Option<UserRow>, RepoError>;
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_find_hash(&self, find_hash: &str) -> Result<Option<UserRow>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT "userId", "username", "findHash"
            FROM users
            WHERE "findHash" = $1
            "#,
        )
        .bind(find_hash)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}
