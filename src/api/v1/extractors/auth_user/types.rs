/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークン検証・アカウント解決のロジックは middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */

use uuid::Uuid;

/// 認証済みのリクエストに付与されるアカウント情報
///
/// - `id` は users."userId" (作成系 handler が所有者スタンプに使う)
/// - handler がここまで来た時点で、検証と解決は両方成功している
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

impl AuthUser {
    pub fn new(id: Uuid, username: String) -> Self {
        Self { id, username }
    }
}
