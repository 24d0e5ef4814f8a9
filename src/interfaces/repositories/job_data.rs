use async_trait::async_trait;

use crate::{
    entities::{
        chat::{ChatReply, ChatRequest, IndexJobsRequest},
        job_listing::JobListing,
        resume::ResumeData,
    },
    errors::ClientError,
    utils::upload::ResumeUpload,
};

/// The remote job/resume data service: resume parsing, job search and the
/// job chat assistant.
#[async_trait]
pub trait JobDataService: Send + Sync {
    async fn parse_resume(&self, upload: ResumeUpload) -> Result<ResumeData, ClientError>;

    /// Searches for `"{role} jobs in {location}"`. A response without an
    /// `OK` status yields no listings rather than an error.
    async fn search_jobs(&self, role: &str, location: &str) -> Result<Vec<JobListing>, ClientError>;

    /// Job categories already indexed for chat.
    async fn job_types(&self) -> Result<Vec<String>, ClientError>;

    /// Starts indexing listings for a new chat category. Returns the
    /// service's acknowledgement as-is.
    async fn index_jobs(&self, request: &IndexJobsRequest) -> Result<serde_json::Value, ClientError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;

    async fn reset_chat(&self) -> Result<(), ClientError>;
}
