/*
 * Responsibility
 * - JSON body extractor。axum の Json rejection (415/422 など) を
 *   一律 400 INVALID_BODY (AppError) に写像する
 * - handler 側は JsonBody<T> を受けるだけで済む
 */
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request("INVALID_BODY", rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
