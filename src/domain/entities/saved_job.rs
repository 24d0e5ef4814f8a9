use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use uuid::Uuid;

use crate::entities::job_listing::{JobHighlights, JobListing};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct SavedJobRow {
    pub user_id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub job_location: String,
    pub job_city: String,
    pub job_state: String,
    pub job_apply_link: String,
    pub job_description: String,
    pub job_posted_human_readable: String,
    pub job_employment_type_text: String,
    pub job_is_remote: bool,
    pub job_highlights: Json<JobHighlights>,
    pub job_salary: Option<String>,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub saved_at: DateTime<Utc>,
}

// ───── API Models ────────────────────────────────────────────────────

/// A bookmarked listing. Unique per `(user_id, job_id)`.
#[derive(Debug, Clone, Serialize)]
pub struct SavedJob {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub job: JobListing,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SavedJobStatus {
    pub job_id: String,
    pub saved: bool,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<SavedJobRow> for SavedJob {
    fn from(row: SavedJobRow) -> Self {
        SavedJob {
            user_id: row.user_id,
            job: JobListing {
                job_id: row.job_id,
                employer_name: row.employer_name,
                employer_logo: row.employer_logo,
                job_title: row.job_title,
                job_employment_type_text: row.job_employment_type_text,
                job_apply_link: row.job_apply_link,
                job_description: row.job_description,
                job_is_remote: row.job_is_remote,
                job_posted_human_readable: row.job_posted_human_readable,
                job_location: row.job_location,
                job_city: row.job_city,
                job_state: row.job_state,
                job_highlights: row.job_highlights.0,
                job_salary: row.job_salary,
                job_min_salary: row.job_min_salary,
                job_max_salary: row.job_max_salary,
            },
            saved_at: row.saved_at,
        }
    }
}
