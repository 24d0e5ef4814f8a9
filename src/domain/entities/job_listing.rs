use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::utils::sanitize::sanitize_rich_text;

/// Highlight sections as the job search service names them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications", default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Vec<String>>,

    #[serde(rename = "Responsibilities", default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,

    #[serde(rename = "Benefits", default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

/// A single job posting returned by the job search service.
///
/// Field names follow the service's wire format so listings can be passed
/// through to clients and back without a mapping layer. Upstream sends
/// `null` for many string fields; those collapse to empty strings. Only
/// `job_id` is required, so any listing the search returned can be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobListing {
    #[validate(length(min = 1, max = 255, message = "Job id cannot be empty"))]
    pub job_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub employer_name: String,

    #[serde(default)]
    pub employer_logo: Option<String>,

    #[validate(length(max = 500, message = "Job title is too long"))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_employment_type_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_apply_link: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_is_remote: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_posted_human_readable: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_location: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_city: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_state: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_highlights: JobHighlights,

    #[serde(default)]
    pub job_salary: Option<String>,

    #[serde(default)]
    pub job_min_salary: Option<f64>,

    #[serde(default)]
    pub job_max_salary: Option<f64>,
}

impl JobListing {
    /// Returns the listing with its description stripped of unsafe markup,
    /// ready to be persisted.
    pub fn sanitized(mut self) -> Self {
        self.job_description = sanitize_rich_text(&self.job_description);
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope returned by `GET /api/job-search`.
#[derive(Debug, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub data: Option<Vec<JobListing>>,
}

impl JobSearchResponse {
    /// Listings of a successful response; anything else is treated as no
    /// results.
    pub fn into_listings(self) -> Option<Vec<JobListing>> {
        if self.status == "OK" {
            self.data
        } else {
            None
        }
    }
}
