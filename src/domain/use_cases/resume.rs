use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use crate::{
    entities::{
        resume::{ResumeProfile, ResumeUploadResponse, SetLocationRequest},
        token::AuthSession,
    },
    errors::AppError,
    repositories::{job_data::JobDataService, resume::ResumeRepository},
    use_cases::require_session,
    utils::upload::ResumeUpload,
};

pub struct ResumeHandler<R, J>
where
    R: ResumeRepository + ?Sized,
    J: JobDataService + ?Sized,
{
    pub resume_repo: Arc<R>,
    pub job_service: Arc<J>,
}

impl<R, J> ResumeHandler<R, J>
where
    R: ResumeRepository + ?Sized,
    J: JobDataService + ?Sized,
{
    pub fn new(resume_repo: Arc<R>, job_service: Arc<J>) -> Self {
        ResumeHandler { resume_repo, job_service }
    }

    /// Sends the upload for parsing. Signed-in users get the result stored
    /// as their profile; a failed save is logged and reported through
    /// `persisted` while the parsed resume is still returned.
    pub async fn parse_resume(
        &self,
        session: Option<&AuthSession>,
        upload: ResumeUpload,
    ) -> Result<ResumeUploadResponse, AppError> {
        let resume = self.job_service.parse_resume(upload).await?;

        let persisted = match session {
            Some(session) => match self.resume_repo.upsert_profile(&session.user_id, &resume).await {
                Ok(_) => {
                    info!("Stored resume profile for user {}", session.user_id);
                    true
                }
                Err(e) => {
                    error!("Failed to store resume profile for user {}: {}", session.user_id, e);
                    false
                }
            },
            None => false,
        };

        Ok(ResumeUploadResponse { resume, persisted })
    }

    pub async fn get_profile(&self, session: Option<&AuthSession>) -> Result<Option<ResumeProfile>, AppError> {
        match session {
            Some(session) => self.resume_repo.get_profile(&session.user_id).await,
            None => Ok(None),
        }
    }

    pub async fn set_preferred_location(
        &self,
        session: Option<&AuthSession>,
        request: SetLocationRequest,
    ) -> Result<ResumeProfile, AppError> {
        let session = require_session(session, "set a preferred location")?;
        request.validate()?;

        self.resume_repo
            .set_preferred_location(&session.user_id, request.location.trim())
            .await
    }

    pub async fn delete_profile(&self, session: Option<&AuthSession>) -> Result<(), AppError> {
        let session = require_session(session, "delete the resume profile")?;

        if self.resume_repo.delete_profile(&session.user_id).await? == 0 {
            return Err(AppError::NotFound("No resume profile found".into()));
        }

        info!("Deleted resume profile for user {}", session.user_id);
        Ok(())
    }
}
