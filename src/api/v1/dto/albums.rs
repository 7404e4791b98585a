/*
 * Responsibility
 * - Albums の request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub name: String,
    pub desc: String,
}

impl CreateAlbumRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.desc.trim().is_empty() {
            return Err("desc is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAlbumRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
}

impl UpdateAlbumRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(desc) = &self.desc
            && desc.trim().is_empty()
        {
            return Err("desc cannot be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub id: Uuid,
    pub name: String,
    pub desc: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
