/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - store は trait object で持つ (Pg 実装 / テスト用 fake を差し替え可能)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::repos::{
    album_repo::{AlbumRow, PgAlbumStore},
    contact_repo::{ContactRow, PgContactStore},
    deck_repo::{DeckRow, PgDeckStore},
    profile_repo::{PgProfileStore, ProfileRow},
    store::DocumentStore,
    user_repo::{PgUserStore, UserStore},
};
use crate::services::auth::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub decks: Arc<dyn DocumentStore<DeckRow>>,
    pub contacts: Arc<dyn DocumentStore<ContactRow>>,
    pub albums: Arc<dyn DocumentStore<AlbumRow>>,
    pub profiles: Arc<dyn DocumentStore<ProfileRow>>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        decks: Arc<dyn DocumentStore<DeckRow>>,
        contacts: Arc<dyn DocumentStore<ContactRow>>,
        albums: Arc<dyn DocumentStore<AlbumRow>>,
        profiles: Arc<dyn DocumentStore<ProfileRow>>,
        verifier: Arc<TokenVerifier>,
    ) -> Self {
        Self {
            users,
            decks,
            contacts,
            albums,
            profiles,
            verifier,
        }
    }

    /// 本番構成: すべての store を同じ PgPool の上に組む。
    pub fn postgres(db: PgPool, verifier: Arc<TokenVerifier>) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(db.clone())),
            Arc::new(PgDeckStore::new(db.clone())),
            Arc::new(PgContactStore::new(db.clone())),
            Arc::new(PgAlbumStore::new(db.clone())),
            Arc::new(PgProfileStore::new(db)),
            verifier,
        )
    }
}
