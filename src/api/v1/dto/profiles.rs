/*
 * Responsibility
 * - Profiles の request/response DTO
 * - avatar_url の update は tri-state (欠落 / null / 値)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl CreateProfileRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if let Some(url) = &self.avatar_url
            && url.len() > 256
        {
            return Err("avatar_url must be <= 256 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    pub avatar_url: Option<Option<String>>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(Some(url)) = &self.avatar_url
            && url.len() > 256
        {
            return Err("avatar_url must be <= 256 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
