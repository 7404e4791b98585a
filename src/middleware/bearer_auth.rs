//! Bearer トークン検証 → アカウント解決 → AuthUser を extensions に入れる
//!
//! Pipeline: Unauthenticated → TokenVerified → UserResolved → handler。
//! どの段階で失敗しても AppError (401) で short-circuit し、handler は呼ばれない。
//!
//! Notes:
//! - 検証そのもの (ヘッダ分類 + 署名/期限) は services::auth::TokenVerifier の責務。
//! - resolver の失敗は「store エラーも含めて」UserNotFound に畳む。
//!   アカウントの存在有無を status で確認できないようにする方針 (詳細は DESIGN.md)。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthUser;
use crate::error::AppError;
use crate::services::auth::AuthFailure;
use crate::state::AppState;

/// 認証を掛けたい Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = resource::routes::<Decks>();
/// let protected = middleware::bearer_auth::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, bearer_auth_middleware))
}

async fn bearer_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Token Verifier: ヘッダ分類 + 署名/期限検証 → lookup key
    let lookup_key = match state.verifier.lookup_key(req.headers()) {
        Ok(key) => key,
        Err(failure) => {
            tracing::warn!(error = %failure, "bearer token verification failed");
            return Err(AppError::Auth(failure));
        }
    };

    // User Resolver: lookup key でアカウントを引く。
    // Ok(None) と Err(_) はどちらも UserNotFound (401) に畳む。
    let user = match state.users.find_by_find_hash(&lookup_key).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!("no account matched the verified lookup key");
            return Err(AppError::Auth(AuthFailure::UserNotFound(
                "no matching account".into(),
            )));
        }
        Err(err) => {
            tracing::warn!(error = %err, "user lookup failed");
            return Err(AppError::Auth(AuthFailure::UserNotFound(err.to_string())));
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut()
        .insert(AuthUser::new(user.id, user.username));

    Ok(next.run(req).await)
}
