use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::job_listing::JobListing;

#[derive(Debug, Deserialize, Validate)]
pub struct ApplyClickRequest {
    #[validate(nested)]
    pub job: JobListing,
}

#[derive(Debug, Serialize)]
pub struct ApplyClickResponse {
    pub job_id: String,
    pub apply_link: String,
}

/// "Yes, I applied" from the confirmation dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmApplicationRequest {
    #[validate(nested)]
    pub job: JobListing,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptDecision {
    pub job_id: String,
    pub should_prompt: bool,
}

/// Result of reconciling the pending candidate on load. `job` is set when
/// the client should ask the user whether they applied.
#[derive(Debug, Serialize)]
pub struct PendingConfirmation {
    pub job: Option<JobListing>,
}
