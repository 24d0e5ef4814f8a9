use std::borrow::Cow;

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Structured resume as returned by the parsing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub basic_info: BasicInfo,
    pub professional_summary: String,
    pub skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub years_of_experience: f64,
    pub recommended_job_roles: Vec<String>,
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct ResumeProfileRow {
    pub user_id: Uuid,
    pub resume_data: Json<ResumeData>,
    pub preferred_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Models ────────────────────────────────────────────────────

/// One profile per user; a new upload overwrites the parsed fields but
/// keeps the preferred location.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeProfile {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub resume: ResumeData,
    pub preferred_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub resume: ResumeData,
    pub persisted: bool,
}

/// `multipart/form-data` body of a resume upload.
#[derive(Debug, MultipartForm)]
pub struct ResumeUploadForm {
    #[multipart(rename = "file")]
    pub file: TempFile,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetLocationRequest {
    #[validate(
        length(max = 200, message = "Location is too long"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("Value cannot be blank"));
        return Err(err);
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ResumeProfileRow> for ResumeProfile {
    fn from(row: ResumeProfileRow) -> Self {
        ResumeProfile {
            user_id: row.user_id,
            resume: row.resume_data.0,
            preferred_location: row.preferred_location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
