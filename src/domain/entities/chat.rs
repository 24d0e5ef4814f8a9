use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{constants::DEFAULT_INDEX_RESULTS, entities::resume::validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(
        length(max = 4000, message = "Query is too long"),
        custom(function = "validate_not_blank")
    )]
    pub query: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub job_type: String,
}

/// A listing the assistant drew on, with its retrieval score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSource {
    pub job_id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<JobSource>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatReply {
    /// Orders sources from most to least relevant.
    pub fn ranked(mut self) -> Self {
        self.sources
            .sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IndexJobsRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub job_type: String,

    #[serde(default = "default_index_location")]
    pub location: String,

    #[validate(range(min = 1, max = 50, message = "num_results must be between 1 and 50"))]
    #[serde(default = "default_index_results")]
    pub num_results: u32,
}

fn default_index_location() -> String {
    "Remote".to_string()
}

fn default_index_results() -> u32 {
    DEFAULT_INDEX_RESULTS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobTypes {
    #[serde(default)]
    pub job_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_orders_sources_by_relevance() {
        let reply: ChatReply = serde_json::from_value(serde_json::json!({
            "response": "Here you go",
            "sources": [
                {"job_id": "a", "relevance_score": 0.2},
                {"job_id": "b", "relevance_score": 0.9},
                {"job_id": "c", "relevance_score": 0.5}
            ],
            "error": null
        }))
        .unwrap();

        let ids: Vec<_> = reply.ranked().sources.into_iter().map(|s| s.job_id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn index_request_defaults_match_the_chat_panel() {
        let request: IndexJobsRequest =
            serde_json::from_value(serde_json::json!({"job_type": "Data Engineer"})).unwrap();

        assert_eq!(request.location, "Remote");
        assert_eq!(request.num_results, DEFAULT_INDEX_RESULTS);
        assert!(request.validate().is_ok());
    }
}
