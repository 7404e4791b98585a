/*
 * Responsibility
 * - モジュール宣言 (bin と tests/ の両方から使う)
 * - build_router / AppState を公開して、テストが本番と同じ Router を組めるようにする
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;

pub use app::build_router;
pub use state::AppState;
