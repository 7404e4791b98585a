/*
 * Responsibility
 * - Config 読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (CORS / security headers / HTTP 層)
 * - axum::serve() で起動
 */
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, services::auth::TokenVerifier, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing();

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    let verifier = Arc::new(TokenVerifier::new(&config.app_secret));
    let state = AppState::postgres(db, verifier);

    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// 本番とテストで同じ Router を共有するための組み立て関数。
pub fn build_router(state: AppState, config: &Config) -> Router {
    let v1 = api::v1::routes(state.clone());

    let app = Router::new().nest("/api/v1", v1).with_state(state);

    let app = middleware::cors::apply(app, config);
    let app = middleware::security_headers::apply(app);
    middleware::http::apply(app)
}
