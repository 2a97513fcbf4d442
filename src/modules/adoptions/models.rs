use chrono::{DateTime, Utc};
use pawhaven_http::validate::{FieldCheck, FieldError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Review state of an inquiry. New inquiries are always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdoptionStatus {
    #[default]
    Pending,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Pending => "Pending",
        }
    }
}

/// Stored adoption inquiry.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct AdoptionRequest {
    pub id: i64,
    pub pet_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/adopt`.
///
/// `pet_id` arrives as a number from scripts and as text from serialized
/// forms; both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitInquiry {
    #[serde(default)]
    pub pet_id: Option<Value>,
    #[serde(default)]
    pub full_name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// A validated inquiry. The pet id is not checked against the pet table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub pet_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: AdoptionStatus,
}

impl SubmitInquiry {
    pub fn validate(self) -> Result<NewInquiry, Vec<FieldError>> {
        let mut check = FieldCheck::new();
        let pet_id = check.positive_id("pet_id", self.pet_id);
        let full_name = check.required_text("full_name", self.full_name);
        let email = check.required_text("email", self.email);
        let phone = check.optional_text("phone", self.phone);
        let message = check.optional_text("message", self.message);

        match (pet_id, full_name, email) {
            (Some(pet_id), Some(full_name), Some(email)) if check.is_clean() => Ok(NewInquiry {
                pet_id,
                full_name,
                email,
                phone,
                message,
                status: AdoptionStatus::default(),
            }),
            _ => Err(check.into_errors()),
        }
    }
}
