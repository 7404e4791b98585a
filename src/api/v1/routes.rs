/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、コレクション系はすべて bearer auth の内側
 * - 各コレクションは resource::routes::<R>() で同じ CRUD 配線を共有する
 */
use axum::{Router, routing::get};

use crate::middleware::bearer_auth;
use crate::state::AppState;

use crate::api::v1::handlers::{
    albums::Albums, contacts::Contacts, decks::Decks, health::health, profiles::Profiles, resource,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/decks", resource::routes::<Decks>())
        .nest("/contacts", resource::routes::<Contacts>())
        .nest("/albums", resource::routes::<Albums>())
        .nest("/profiles", resource::routes::<Profiles>());

    // resource handler の手前で verify → resolve を必ず通す
    let protected = bearer_auth::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
