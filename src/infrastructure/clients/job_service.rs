use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::{
    constants::{SEARCH_NUM_PAGES, SEARCH_PAGE},
    entities::{
        chat::{ChatReply, ChatRequest, IndexJobsRequest, JobTypes},
        job_listing::{JobListing, JobSearchResponse},
        resume::ResumeData,
    },
    errors::ClientError,
    repositories::job_data::JobDataService,
    utils::upload::ResumeUpload,
};

const RESUME_PARSE_ENDPOINT: &str = "/api/resume/parse";
const JOB_SEARCH_ENDPOINT: &str = "/api/job-search";
const JOB_TYPES_ENDPOINT: &str = "/api/chatbot/job-types";
const INDEX_JOBS_ENDPOINT: &str = "/api/chatbot/search-and-index-jobs";
const CHAT_ENDPOINT: &str = "/api/chatbot/chat";
const RESET_CHAT_ENDPOINT: &str = "/api/chatbot/reset-chat";

/// reqwest client for the job/resume data service.
#[derive(Clone)]
pub struct HttpJobService {
    client: Client,
    base_url: String,
}

impl HttpJobService {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ClientError::from);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        error!("Job service returned {}: {}", status, message);
        Err(ClientError::Status { status: status.as_u16(), message })
    }
}

/// Pulls the human-readable message out of an error body. The service
/// reports failures as `{"detail": ...}` or `{"error": ...}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|field| value.get(*field).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[async_trait]
impl JobDataService for HttpJobService {
    async fn parse_resume(&self, upload: ResumeUpload) -> Result<ResumeData, ClientError> {
        let url = self.url(RESUME_PARSE_ENDPOINT);
        info!("Sending resume {} ({} bytes) for parsing", upload.file_name, upload.bytes.len());

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.content_type)
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::decode(response).await
    }

    async fn search_jobs(&self, role: &str, location: &str) -> Result<Vec<JobListing>, ClientError> {
        let query = format!("{} jobs in {}", role.trim(), location.trim());
        let page = SEARCH_PAGE.to_string();
        let num_pages = SEARCH_NUM_PAGES.to_string();
        info!("Searching jobs: {}", query);

        let response = self
            .client
            .get(self.url(JOB_SEARCH_ENDPOINT))
            .query(&[
                ("query", query.as_str()),
                ("page", page.as_str()),
                ("num_pages", num_pages.as_str()),
            ])
            .send()
            .await?;

        let body: JobSearchResponse = Self::decode(response).await?;
        match body.into_listings() {
            Some(listings) => Ok(listings),
            None => {
                warn!("Job search for '{}' returned no usable data", query);
                Ok(Vec::new())
            }
        }
    }

    async fn job_types(&self) -> Result<Vec<String>, ClientError> {
        let response = self.client.get(self.url(JOB_TYPES_ENDPOINT)).send().await?;
        let body: JobTypes = Self::decode(response).await?;
        Ok(body.job_types)
    }

    async fn index_jobs(&self, request: &IndexJobsRequest) -> Result<serde_json::Value, ClientError> {
        info!("Indexing {} '{}' jobs in {}", request.num_results, request.job_type, request.location);
        let response = self
            .client
            .post(self.url(INDEX_JOBS_ENDPOINT))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let response = self.client.post(self.url(CHAT_ENDPOINT)).json(request).send().await?;
        let reply: ChatReply = Self::decode(response).await?;
        Ok(reply.ranked())
    }

    async fn reset_chat(&self) -> Result<(), ClientError> {
        let response = self.client.post(self.url(RESET_CHAT_ENDPOINT)).send().await?;
        let _: serde_json::Value = Self::decode(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail_then_error() {
        assert_eq!(error_message(r#"{"detail": "bad file"}"#), Some("bad file".to_string()));
        assert_eq!(error_message(r#"{"error": "no index"}"#), Some("no index".to_string()));
        assert_eq!(error_message("<html>oops</html>"), None);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = HttpJobService::new("http://localhost:8000/", 5).unwrap();
        assert_eq!(client.url(JOB_SEARCH_ENDPOINT), "http://localhost:8000/api/job-search");
    }
}
