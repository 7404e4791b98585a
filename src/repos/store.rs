/*
 * Responsibility
 * - コレクション 1 つ分の永続化境界 (trait)
 * - AppState は Arc<dyn DocumentStore<...>> で持つ (Pg 実装 / テスト用 fake を差し替え可能)
 */
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::error::RepoError;

/// One stored document type. `Draft` is what `insert` consumes (already
/// stamped with the owning user), `Patch` is a partial update where
/// `None` means "do not touch this column".
pub trait Document: Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;
}

/// CRUD boundary for a single collection.
///
/// Every operation is one atomic statement against the store; there is no
/// cross-document consistency requirement.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    async fn insert(&self, draft: D::Draft) -> Result<D, RepoError>;

    async fn list(&self) -> Result<Vec<D>, RepoError>;

    async fn find(&self, id: Uuid) -> Result<Option<D>, RepoError>;

    /// Returns `None` when no row matched `id`.
    async fn update(&self, id: Uuid, patch: D::Patch) -> Result<Option<D>, RepoError>;

    /// Returns whether a row was actually deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
}
