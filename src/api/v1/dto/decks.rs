/*
 * Responsibility
 * - Decks の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateDeckRequest {
    pub name: String,
}

impl CreateDeckRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateDeckRequest {
    pub name: Option<String>,
}

impl UpdateDeckRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub updated_at: DateTime<Utc>,
}
