use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{
    error::{JsonPayloadError, PathError, PayloadError, QueryPayloadError},
    http::StatusCode,
    web, HttpResponse, ResponseError,
};
use serde_json::json;

use crate::errors::UploadError;

/// Turns extractor failures into the same `{"error": ...}` body the rest of
/// the API returns.
pub fn config_routes(cfg: &mut web::ServiceConfig, max_upload_bytes: usize) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| ExtractorError::from(err).into()))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| ExtractorError::from(err).into()))
        .app_data(web::PathConfig::default().error_handler(|err, _req| ExtractorError::from(err).into()))
        .app_data(
            MultipartFormConfig::default()
                .total_limit(max_upload_bytes)
                .error_handler(|err, _req| ExtractorError::from(err).into()),
        );
}

#[derive(Debug)]
pub struct ExtractorError {
    message: String,
    status: StatusCode,
}

impl ExtractorError {
    fn bad_request(message: String) -> Self {
        ExtractorError {
            message,
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ExtractorError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for ExtractorError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match err {
            JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            _ => StatusCode::BAD_REQUEST,
        };
        ExtractorError {
            message: format!("JSON payload error: {}", err),
            status,
        }
    }
}

impl From<QueryPayloadError> for ExtractorError {
    fn from(err: QueryPayloadError) -> Self {
        ExtractorError::bad_request(format!("Invalid query string: {}", err))
    }
}

impl From<PathError> for ExtractorError {
    fn from(err: PathError) -> Self {
        ExtractorError::bad_request(format!("Invalid path: {}", err))
    }
}

impl From<MultipartError> for ExtractorError {
    fn from(err: MultipartError) -> Self {
        let upload_error = match err {
            MultipartError::MissingField(_) => UploadError::MissingFile,
            MultipartError::Payload(PayloadError::Overflow) => {
                return ExtractorError {
                    message: "File exceeds the upload size limit".into(),
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                };
            }
            other => UploadError::from(other),
        };
        ExtractorError::bad_request(upload_error.to_string())
    }
}
