use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::{
    entities::{
        applied_job::{AppliedJob, AppliedJobStatus, TrackApplicationRequest, UpdateApplicationRequest},
        token::AuthSession,
    },
    errors::AppError,
    repositories::applied_job::AppliedJobRepository,
    use_cases::require_session,
};

pub struct AppliedJobsHandler<R>
where
    R: AppliedJobRepository + ?Sized,
{
    pub applied_repo: Arc<R>,
}

impl<R> AppliedJobsHandler<R>
where
    R: AppliedJobRepository + ?Sized,
{
    pub fn new(applied_repo: Arc<R>) -> Self {
        AppliedJobsHandler { applied_repo }
    }

    /// Records an application with status `Applied`.
    pub async fn track_application(
        &self,
        session: Option<&AuthSession>,
        request: TrackApplicationRequest,
    ) -> Result<AppliedJob, AppError> {
        let session = require_session(session, "track applications")?;
        request.validate()?;

        let applied = self
            .applied_repo
            .upsert_application(&session.user_id, &request.job.sanitized(), request.notes)
            .await?;

        info!("User {} applied to job {}", session.user_id, applied.job.job_id);
        Ok(applied)
    }

    /// Moves an application to `status`. Omitted notes keep the stored ones.
    pub async fn update_status(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
        request: UpdateApplicationRequest,
    ) -> Result<AppliedJob, AppError> {
        let session = require_session(session, "update applications")?;
        request.validate()?;

        self.applied_repo
            .update_application(&session.user_id, job_id, request.status, request.notes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No application found for job {}", job_id)))
    }

    /// `None` without a session. A signed-in user asking for a job they
    /// never tracked gets `NotFound`.
    pub async fn get_application(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
    ) -> Result<Option<AppliedJob>, AppError> {
        let Some(session) = session else {
            return Ok(None);
        };

        self.applied_repo
            .get_application(&session.user_id, job_id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::NotFound(format!("No application found for job {}", job_id)))
    }

    pub async fn has_applied(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
    ) -> Result<AppliedJobStatus, AppError> {
        let applied = match session {
            Some(session) => self.applied_repo.has_applied(&session.user_id, job_id).await?,
            None => false,
        };

        Ok(AppliedJobStatus {
            job_id: job_id.to_string(),
            applied,
        })
    }

    pub async fn list_applied_jobs(&self, session: Option<&AuthSession>) -> Result<Vec<AppliedJob>, AppError> {
        match session {
            Some(session) => self.applied_repo.list_applications(&session.user_id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn remove_applied_job(
        &self,
        session: Option<&AuthSession>,
        job_id: &str,
    ) -> Result<(), AppError> {
        let session = require_session(session, "remove applications")?;

        if self.applied_repo.delete_application(&session.user_id, job_id).await? == 0 {
            debug!("No application for job {} and user {}", job_id, session.user_id);
        }

        Ok(())
    }
}
