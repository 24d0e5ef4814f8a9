use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::{
    entities::{
        job_listing::JobListing,
        search::{JobSearchQuery, RoleSearchOutcome, RoleSearchQuery},
        token::AuthSession,
    },
    errors::AppError,
    repositories::{job_data::JobDataService, resume::ResumeRepository},
};

pub struct JobSearchHandler<R, J>
where
    R: ResumeRepository + ?Sized,
    J: JobDataService + ?Sized,
{
    pub resume_repo: Arc<R>,
    pub job_service: Arc<J>,
}

impl<R, J> JobSearchHandler<R, J>
where
    R: ResumeRepository + ?Sized,
    J: JobDataService + ?Sized,
{
    pub fn new(resume_repo: Arc<R>, job_service: Arc<J>) -> Self {
        JobSearchHandler { resume_repo, job_service }
    }

    pub async fn search_jobs(&self, query: JobSearchQuery) -> Result<Vec<JobListing>, AppError> {
        query.validate()?;

        let jobs = self
            .job_service
            .search_jobs(query.role.trim(), query.location.trim())
            .await?;

        Ok(jobs.into_iter().map(JobListing::sanitized).collect())
    }

    /// Searches for one of the user's recommended roles.
    ///
    /// A location given with the query wins and becomes the user's
    /// preferred location. Otherwise the stored preference is used; with
    /// neither the caller gets [`RoleSearchOutcome::LocationRequired`].
    pub async fn search_for_role(
        &self,
        session: Option<&AuthSession>,
        query: RoleSearchQuery,
    ) -> Result<RoleSearchOutcome, AppError> {
        query.validate()?;
        let role = query.role.trim().to_string();

        let provided = query
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let location = match (provided, session) {
            (Some(location), Some(session)) => {
                if let Err(e) = self.resume_repo.set_preferred_location(&session.user_id, &location).await {
                    warn!("Failed to store preferred location for user {}: {}", session.user_id, e);
                }
                Some(location)
            }
            (Some(location), None) => Some(location),
            (None, Some(session)) => self
                .resume_repo
                .get_profile(&session.user_id)
                .await?
                .and_then(|profile| profile.preferred_location)
                .filter(|l| !l.trim().is_empty()),
            (None, None) => None,
        };

        let Some(location) = location else {
            info!("No location available for role search '{}'", role);
            return Ok(RoleSearchOutcome::location_required(role));
        };

        let jobs = self
            .search_jobs(JobSearchQuery {
                role: role.clone(),
                location: location.clone(),
            })
            .await?;

        Ok(RoleSearchOutcome::Listings { role, location, jobs })
    }
}
