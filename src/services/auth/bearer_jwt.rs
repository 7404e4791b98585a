/*
 * Responsibility
 * - Bearer トークンの分類と検証 (ヘッダ抽出 → HS256 検証 → lookup key 取り出し)
 * - 失敗はすべて AuthFailure に畳み込む (ライブラリのエラー型を上に漏らさない)
 * - シークレットは構築時に注入する (プロセス環境を直接読まない)
 */
use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

/// Classified authentication failures.
///
/// Every variant maps to HTTP 401; callers can only tell them apart by
/// the body's code/message. `UserNotFound` is produced by the resolver
/// side of the pipeline but lives here so the taxonomy stays in one place.
#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error("authorization header is missing")]
    MissingAuthHeader,
    #[error("bearer token is missing")]
    MissingToken,
    #[error("token verification failed: {0}")]
    InvalidToken(String),
    #[error("unknown user: {0}")]
    UserNotFound(String),
}

impl AuthFailure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingAuthHeader => "MISSING_AUTH_HEADER",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
        }
    }
}

/// Bearer トークンの claims。
///
/// - `token` は発行側が署名時に入れる lookup key (`findHash`)。
///   `sub` ではないのはプロジェクト規約 (発行側の payload 形式に合わせる)。
/// - `exp` は `Validation` のデフォルトで必須・検証対象。
#[derive(Debug, Deserialize)]
struct Claims {
    token: String,
    #[allow(dead_code)]
    exp: u64,
}

/// HS256 bearer-token verifier.
///
/// - Key material is intentionally not printable via Debug.
/// - Pure and deterministic: a failure is never transient, so no retries.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        // `exp` の必須化と検証は Validation::new のデフォルトに任せる
        let validation = Validation::new(Algorithm::HS256);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Step 1-2: header presence + `Bearer ` scheme check.
    ///
    /// Returns the candidate token without touching the key material,
    /// so this is a plain associated function.
    pub fn token_from_headers(headers: &HeaderMap) -> Result<&str, AuthFailure> {
        let header = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthFailure::MissingAuthHeader)?;

        let header = header.to_str().map_err(|_| AuthFailure::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthFailure::MissingToken)?
            .trim();
        if token.is_empty() {
            return Err(AuthFailure::MissingToken);
        }

        Ok(token)
    }

    /// Step 3-4: signature/expiry verification + lookup-key extraction.
    ///
    /// The underlying jsonwebtoken message is preserved inside
    /// `InvalidToken` for diagnostics.
    pub fn verify(&self, token: &str) -> Result<String, AuthFailure> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthFailure::InvalidToken(e.to_string()))?;

        let key = data.claims.token;
        if key.trim().is_empty() {
            return Err(AuthFailure::InvalidToken("empty 'token' claim".into()));
        }

        Ok(key)
    }

    /// ヘッダ集合から検証済み lookup key まで一気に通す。
    /// middleware から使う想定のエントリポイント。
    pub fn lookup_key(&self, headers: &HeaderMap) -> Result<String, AuthFailure> {
        let token = Self::token_from_headers(headers)?;
        self.verify(token)
    }
}
