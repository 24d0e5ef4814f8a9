use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{job_listing::JobListing, navigation::ViewState, resume::validate_not_blank};

#[derive(Debug, Deserialize, Validate)]
pub struct JobSearchQuery {
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub role: String,

    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub location: String,
}

/// Search for one of the resume's recommended roles. The location may be
/// left out when the user already has a preferred one.
#[derive(Debug, Deserialize, Validate)]
pub struct RoleSearchQuery {
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub role: String,

    #[validate(length(max = 200))]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoleSearchOutcome {
    Listings {
        role: String,
        location: String,
        jobs: Vec<JobListing>,
    },
    /// No location was given and none is stored; the client has to ask
    /// for one and retry. `next_view` is the prompt to show.
    LocationRequired { role: String, next_view: ViewState },
}

impl RoleSearchOutcome {
    pub fn location_required(role: String) -> Self {
        let next_view = ViewState::LocationPrompt { role: role.clone() };
        RoleSearchOutcome::LocationRequired { role, next_view }
    }
}
