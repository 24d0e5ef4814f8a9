pub mod applied_jobs;
pub mod chat;
pub mod extractors;
pub mod job_search;
pub mod resume;
pub mod saved_jobs;
pub mod tracker;

use crate::{entities::token::AuthSession, errors::AppError};

/// Unwraps the session of a mutating operation, or fails with
/// "User must be authenticated to {action}".
pub(crate) fn require_session<'a>(
    session: Option<&'a AuthSession>,
    action: &str,
) -> Result<&'a AuthSession, AppError> {
    session.ok_or_else(|| AppError::AuthenticationRequired(action.to_string()))
}
