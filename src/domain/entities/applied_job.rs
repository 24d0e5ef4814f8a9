use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::entities::job_listing::{JobHighlights, JobListing};

const MAX_NOTES_LENGTH: u64 = 2000;

/// Where an application currently stands. New applications start at
/// `Applied`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interview,
    Rejected,
    Offer,
    Accepted,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(ApplicationStatus::Applied),
            "Interview" => Ok(ApplicationStatus::Interview),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            "Offer" => Ok(ApplicationStatus::Offer),
            "Accepted" => Ok(ApplicationStatus::Accepted),
            "Withdrawn" => Ok(ApplicationStatus::Withdrawn),
            other => Err(format!("Unknown application status: {other}")),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct AppliedJobRow {
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
    pub application_status: String,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
}

// ───── API Models ────────────────────────────────────────────────────

/// A listing the user confirmed applying to. Unique per `(user_id, job_id)`.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedJob {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub job: JobListing,
    pub application_status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TrackApplicationRequest {
    #[validate(nested)]
    pub job: JobListing,

    #[validate(length(max = MAX_NOTES_LENGTH, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Status change for an existing application. Omitted notes are left as
/// they are.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    pub status: ApplicationStatus,

    #[validate(length(max = MAX_NOTES_LENGTH, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AppliedJobStatus {
    pub job_id: String,
    pub applied: bool,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<AppliedJobRow> for AppliedJob {
    fn from(row: AppliedJobRow) -> Self {
        let application_status = row.application_status.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to Applied", e);
            ApplicationStatus::Applied
        });

        AppliedJob {
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
            application_status,
            notes: row.notes,
            applied_at: row.applied_at,
        }
    }
}
