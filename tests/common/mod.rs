//! Shared test harness: in-memory stores + a router wired exactly like
//! production (`build_router`), so tests drive the real pipeline with
//! `tower::ServiceExt::oneshot` and no external services.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use collections_api::config::{AppEnv, Config};
use collections_api::repos::album_repo::{AlbumPatch, AlbumRow, NewAlbum};
use collections_api::repos::contact_repo::{ContactPatch, ContactRow, NewContact};
use collections_api::repos::deck_repo::{DeckPatch, DeckRow, NewDeck};
use collections_api::repos::error::RepoError;
use collections_api::repos::profile_repo::{NewProfile, ProfilePatch, ProfileRow};
use collections_api::repos::store::DocumentStore;
use collections_api::repos::user_repo::{UserRow, UserStore};
use collections_api::services::auth::TokenVerifier;
use collections_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

pub fn mint_token(secret: &str, find_hash: &str) -> String {
    mint_token_with_exp(secret, find_hash, Utc::now().timestamp() + 600)
}

pub fn expired_token(secret: &str, find_hash: &str) -> String {
    mint_token_with_exp(secret, find_hash, Utc::now().timestamp() - 600)
}

fn mint_token_with_exp(secret: &str, find_hash: &str, exp: i64) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({ "token": find_hash, "exp": exp }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

/// Account store fake. Counts lookups so tests can assert the pipeline
/// short-circuits before any store access.
#[derive(Default)]
pub struct MemUserStore {
    users: Mutex<Vec<UserRow>>,
    lookups: AtomicUsize,
}

impl MemUserStore {
    pub fn insert(&self, user: UserRow) {
        self.users.lock().unwrap().push(user);
    }

    pub fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().retain(|u| u.id != id);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn find_by_find_hash(&self, find_hash: &str) -> Result<Option<UserRow>, RepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.find_hash == find_hash).cloned())
    }
}

/// Account store that always fails, for the collapsed-error policy tests.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_find_hash(&self, _find_hash: &str) -> Result<Option<UserRow>, RepoError> {
        Err(RepoError::Db(sqlx::Error::PoolTimedOut))
    }
}

#[derive(Default)]
pub struct MemDeckStore {
    rows: Mutex<HashMap<Uuid, DeckRow>>,
    inserts: AtomicUsize,
}

impl MemDeckStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore<DeckRow> for MemDeckStore {
    async fn insert(&self, draft: NewDeck) -> Result<DeckRow, RepoError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let row = DeckRow {
            id: Uuid::new_v4(),
            name: draft.name,
            user_id: draft.user_id,
            updated_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<DeckRow>, RepoError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<DeckRow>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: DeckPatch) -> Result<Option<DeckRow>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            row.name = name;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemContactStore {
    rows: Mutex<HashMap<Uuid, ContactRow>>,
}

#[async_trait]
impl DocumentStore<ContactRow> for MemContactStore {
    async fn insert(&self, draft: NewContact) -> Result<ContactRow, RepoError> {
        let row = ContactRow {
            id: Uuid::new_v4(),
            name: draft.name,
            dob: draft.dob,
            phone: draft.phone,
            user_id: draft.user_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ContactRow>, RepoError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactRow>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: ContactPatch) -> Result<Option<ContactRow>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(dob) = patch.dob {
            row.dob = dob;
        }
        if let Some(phone) = patch.phone {
            row.phone = phone;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemAlbumStore {
    rows: Mutex<HashMap<Uuid, AlbumRow>>,
}

#[async_trait]
impl DocumentStore<AlbumRow> for MemAlbumStore {
    async fn insert(&self, draft: NewAlbum) -> Result<AlbumRow, RepoError> {
        let row = AlbumRow {
            id: Uuid::new_v4(),
            name: draft.name,
            desc: draft.desc,
            user_id: draft.user_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<AlbumRow>, RepoError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<AlbumRow>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: AlbumPatch) -> Result<Option<AlbumRow>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(desc) = patch.desc {
            row.desc = desc;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemProfileStore {
    rows: Mutex<HashMap<Uuid, ProfileRow>>,
}

#[async_trait]
impl DocumentStore<ProfileRow> for MemProfileStore {
    async fn insert(&self, draft: NewProfile) -> Result<ProfileRow, RepoError> {
        let row = ProfileRow {
            id: Uuid::new_v4(),
            name: draft.name,
            bio: draft.bio,
            avatar_url: draft.avatar_url,
            user_id: draft.user_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ProfileRow>, RepoError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<ProfileRow>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, patch: ProfilePatch) -> Result<Option<ProfileRow>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(bio) = patch.bio {
            row.bio = Some(bio);
        }
        if let Some(avatar_url) = patch.avatar_url {
            row.avatar_url = avatar_url;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<MemUserStore>,
    pub decks: Arc<MemDeckStore>,
    pub contacts: Arc<MemContactStore>,
    pub albums: Arc<MemAlbumStore>,
    pub profiles: Arc<MemProfileStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_secret(TEST_SECRET)
    }

    pub fn with_secret(secret: &str) -> Self {
        let users = Arc::new(MemUserStore::default());
        Self::build(users, secret)
    }

    pub fn with_failing_user_store() -> Router {
        let state = AppState::new(
            Arc::new(FailingUserStore),
            Arc::new(MemDeckStore::default()),
            Arc::new(MemContactStore::default()),
            Arc::new(MemAlbumStore::default()),
            Arc::new(MemProfileStore::default()),
            Arc::new(TokenVerifier::new(TEST_SECRET)),
        );
        collections_api::build_router(state, &test_config())
    }

    fn build(users: Arc<MemUserStore>, secret: &str) -> Self {
        let decks = Arc::new(MemDeckStore::default());
        let contacts = Arc::new(MemContactStore::default());
        let albums = Arc::new(MemAlbumStore::default());
        let profiles = Arc::new(MemProfileStore::default());

        let state = AppState::new(
            users.clone(),
            decks.clone(),
            contacts.clone(),
            albums.clone(),
            profiles.clone(),
            Arc::new(TokenVerifier::new(secret)),
        );

        let router = collections_api::build_router(state, &test_config());

        Self {
            router,
            users,
            decks,
            contacts,
            albums,
            profiles,
        }
    }

    /// Seed an account and return it together with a valid bearer token.
    pub fn seed_user(&self, username: &str, find_hash: &str) -> (UserRow, String) {
        let user = UserRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            find_hash: find_hash.to_string(),
        };
        self.users.insert(user.clone());
        let token = mint_token(TEST_SECRET, find_hash);
        (user, token)
    }
}

fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: String::new(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        app_secret: TEST_SECRET.to_string(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn delete_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
