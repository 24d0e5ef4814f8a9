use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::{
    entities::{
        job_listing::JobListing,
        saved_job::{SavedJob, SavedJobStatus},
        token::AuthSession,
    },
    errors::AppError,
    repositories::saved_job::SavedJobRepository,
    use_cases::require_session,
};

/// Bookmarks of job listings, one per `(user, job_id)`.
pub struct SavedJobsHandler<R>
where
    R: SavedJobRepository + ?Sized,
{
    pub saved_repo: Arc<R>,
}

impl<R> SavedJobsHandler<R>
where
    R: SavedJobRepository + ?Sized,
{
    pub fn new(saved_repo: Arc<R>) -> Self {
        SavedJobsHandler { saved_repo }
    }

    /// Saves `job` for the user. Saving the same job again refreshes the
    /// stored listing and `saved_at` instead of adding a second row.
    pub async fn save_job(
        &self,
        session: Option<&AuthSession>,
        job: JobListing,
    ) -> Result<SavedJob, AppError> {
        let session = require_session(session, "save jobs")?;
        job.validate()?;

        let saved = self
            .saved_repo
            .upsert_saved_job(&session.user_id, &job.sanitized())
            .await?;

        info!("User {} saved job {}", session.user_id, saved.job.job_id);
        Ok(saved)
    }

    pub async fn is_job_saved(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
    ) -> Result<SavedJobStatus, AppError> {
        let saved = match session {
            Some(session) => self.saved_repo.is_job_saved(&session.user_id, job_id).await?,
            None => false,
        };

        Ok(SavedJobStatus {
            job_id: job_id.to_string(),
            saved,
        })
    }

    /// Newest first. Empty without a session.
    pub async fn list_saved_jobs(&self, session: Option<&AuthSession>) -> Result<Vec<SavedJob>, AppError> {
        match session {
            Some(session) => self.saved_repo.list_saved_jobs(&session.user_id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Removing a job that is not saved is a no-op.
    pub async fn remove_saved_job(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
    ) -> Result<(), AppError> {
        let session = require_session(session, "remove saved jobs")?;

        let removed = self.saved_repo.delete_saved_job(&session.user_id, job_id).await?;
        if removed == 0 {
            debug!("Job {} was not saved for user {}", job_id, session.user_id);
        }

        Ok(())
    }

    /// Flips the bookmark state of `job` and returns the new state.
    pub async fn toggle_saved(
        &self,
        session: Option<&AuthSession>,
        job: JobListing,
    ) -> Result<SavedJobStatus, AppError> {
        let session = require_session(session, "save jobs")?;
        let job_id = job.job_id.clone();

        let saved = if self.saved_repo.is_job_saved(&session.user_id, &job_id).await? {
            self.remove_saved_job(Some(session), &job_id).await?;
            false
        } else {
            self.save_job(Some(session), job).await?;
            true
        };

        Ok(SavedJobStatus { job_id, saved })
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.saved_repo.check_connection().await
    }
}
