use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::chat::{ChatReply, ChatRequest, IndexJobsRequest},
    errors::AppError,
    repositories::job_data::JobDataService,
};

/// The job assistant. Requests are validated before anything is sent.
pub struct ChatHandler<J>
where
    J: JobDataService + ?Sized,
{
    pub job_service: Arc<J>,
}

impl<J> ChatHandler<J>
where
    J: JobDataService + ?Sized,
{
    pub fn new(job_service: Arc<J>) -> Self {
        ChatHandler { job_service }
    }

    pub async fn job_types(&self) -> Result<Vec<String>, AppError> {
        Ok(self.job_service.job_types().await?)
    }

    pub async fn index_jobs(&self, request: IndexJobsRequest) -> Result<serde_json::Value, AppError> {
        request.validate()?;
        Ok(self.job_service.index_jobs(&request).await?)
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply, AppError> {
        request.validate()?;
        let reply = self.job_service.chat(&request).await?;
        Ok(reply.ranked())
    }

    pub async fn reset_chat(&self) -> Result<(), AppError> {
        Ok(self.job_service.reset_chat().await?)
    }
}
