/*
 * Responsibility
 * - Contacts の request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub dob: String,
    pub phone: String,
}

impl CreateContactRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.dob.trim().is_empty() {
            return Err("dob is required");
        }
        if self.phone.trim().is_empty() {
            return Err("phone is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub phone: Option<String>,
}

impl UpdateContactRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(dob) = &self.dob
            && dob.trim().is_empty()
        {
            return Err("dob cannot be empty");
        }
        if let Some(phone) = &self.phone
            && phone.trim().is_empty()
        {
            return Err("phone cannot be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
