/*
 * Responsibility
 * - コレクション共通の CRUD handler (generic)
 * - 各コレクションは ResourceDef を実装するだけで、route 配線・status code・
 *   validation の流れをここに一本化する (resource ごとの router 重複をなくす)
 *
 * Status code 方針:
 * - create: 201 + JSON document / body 不正は 400 INVALID_BODY
 * - get/update/delete: 該当 id なしは 404
 * - update: 空 body は 400 EMPTY_BODY
 * - delete: 204
 */
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::api::v1::extractors::{AuthUserExtractor, JsonBody};
use crate::error::AppError;
use crate::repos::store::{Document, DocumentStore};
use crate::state::AppState;

/// One collection's contribution to the shared CRUD pipeline.
///
/// Implementors supply the DTO types, the draft/patch conversions
/// (including validation) and the store accessor. Routing, auth context
/// and status codes live in the generic handlers.
pub trait ResourceDef: Send + Sync + 'static {
    /// Singular label used in error messages ("deck not found.").
    const NAME: &'static str;

    type Doc: Document;
    type Create: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;
    type Response: Serialize + Send + 'static;

    fn store(state: &AppState) -> &dyn DocumentStore<Self::Doc>;

    /// Validate the create body and turn it into a draft stamped with the
    /// authenticated owner. `Err` is a validation message (→ 400).
    fn draft(
        req: Self::Create,
        owner: Uuid,
    ) -> Result<<Self::Doc as Document>::Draft, &'static str>;

    /// Validate the update body and turn it into a partial patch.
    fn patch(req: Self::Update) -> Result<<Self::Doc as Document>::Patch, &'static str>;

    fn is_empty_patch(patch: &<Self::Doc as Document>::Patch) -> bool;

    fn response(doc: Self::Doc) -> Self::Response;
}

/// Route table for one collection: `/` (list, create) and `/{id}`.
pub fn routes<R: ResourceDef>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_one::<R>).put(update::<R>).delete(delete_one::<R>),
        )
}

pub async fn list<R: ResourceDef>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Response>>, AppError> {
    let docs = R::store(&state).list().await?;
    let res = docs.into_iter().map(R::response).collect();

    Ok(Json(res))
}

pub async fn create<R: ResourceDef>(
    State(state): State<AppState>,
    AuthUserExtractor(user): AuthUserExtractor,
    JsonBody(req): JsonBody<R::Create>,
) -> Result<(StatusCode, Json<R::Response>), AppError> {
    // 所有者は body ではなく認証済みユーザーからスタンプする
    let draft =
        R::draft(req, user.id).map_err(|msg| AppError::bad_request("INVALID_BODY", msg))?;

    let doc = R::store(&state).insert(draft).await?;

    Ok((StatusCode::CREATED, Json(R::response(doc))))
}

pub async fn get_one<R: ResourceDef>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<R::Response>, AppError> {
    let doc = R::store(&state)
        .find(id)
        .await?
        .ok_or(AppError::not_found(R::NAME))?;

    Ok(Json(R::response(doc)))
}

pub async fn update<R: ResourceDef>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<R::Update>,
) -> Result<Json<R::Response>, AppError> {
    let patch = R::patch(req).map_err(|msg| AppError::bad_request("INVALID_BODY", msg))?;
    if R::is_empty_patch(&patch) {
        return Err(AppError::bad_request(
            "EMPTY_BODY",
            "request body must contain at least one field",
        ));
    }

    let doc = R::store(&state)
        .update(id, patch)
        .await?
        .ok_or(AppError::not_found(R::NAME))?;

    Ok(Json(R::response(doc)))
}

pub async fn delete_one<R: ResourceDef>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = R::store(&state).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(R::NAME))
    }
}
