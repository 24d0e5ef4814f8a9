use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::RECENTLY_VIEWED_LIMIT,
    entities::{
        applied_job::AppliedJob,
        job_listing::JobListing,
        token::AuthSession,
        tracker::{ApplyClickRequest, ApplyClickResponse, ConfirmApplicationRequest, PendingConfirmation},
    },
    errors::{AppError, StoreError},
    repositories::{
        applied_job::AppliedJobRepository,
        local_store::{LocalStore, StoreKey, TypedStore},
    },
    use_cases::require_session,
};

/// Follows a job from the apply click to the "did you apply?" question.
///
/// Client-side markers (pending candidate, dismissals, recently viewed)
/// live in the local store and are best-effort: a failing store is logged
/// and otherwise ignored. Confirmed applications go to the applied-job
/// repository.
pub struct ApplicationTracker<A, S>
where
    A: AppliedJobRepository + ?Sized,
    S: LocalStore + ?Sized,
{
    pub applied_repo: Arc<A>,
    pub store: TypedStore<S>,
}

impl<A, S> ApplicationTracker<A, S>
where
    A: AppliedJobRepository + ?Sized,
    S: LocalStore + ?Sized,
{
    pub fn new(applied_repo: Arc<A>, store: TypedStore<S>) -> Self {
        ApplicationTracker { applied_repo, store }
    }

    /// Remembers the click and hands back the link to open. Without a
    /// session nothing is remembered.
    pub async fn record_apply_click(
        &self,
        session: Option<&AuthSession>,
        request: ApplyClickRequest,
    ) -> Result<ApplyClickResponse, AppError> {
        request.validate()?;
        let job = request.job;

        if let Some(session) = session {
            let user_id = session.user_id;

            let mut recent = self.recent(&user_id).await;
            recent.retain(|viewed| viewed.job_id != job.job_id);
            recent.insert(0, job.clone());
            recent.truncate(RECENTLY_VIEWED_LIMIT);

            log_store_failure(
                "update recently viewed jobs",
                self.store.set(&StoreKey::RecentlyViewed(user_id), &recent).await,
            );
            log_store_failure(
                "store pending confirmation",
                self.store.set(&StoreKey::PendingConfirmation(user_id), &job).await,
            );
        }

        Ok(ApplyClickResponse {
            job_id: job.job_id,
            apply_link: job.job_apply_link,
        })
    }

    /// Whether the user should still be asked about `job_id`.
    pub async fn should_prompt(&self, session: Option<&AuthSession>, job_id: &str) -> bool {
        match session {
            Some(session) => !self.dismissed(&session.user_id).await.iter().any(|id| id == job_id),
            None => true,
        }
    }

    /// Never ask about `job_id` again.
    pub async fn dismiss(&self, session: Option<&AuthSession>, job_id: &str) -> Result<(), AppError> {
        let session = require_session(session, "dismiss application prompts")?;
        if job_id.trim().is_empty() {
            return Err(AppError::InvalidInput("Job id cannot be empty".into()));
        }
        let user_id = session.user_id;

        let mut dismissed = self.dismissed(&user_id).await;
        if !dismissed.iter().any(|id| id == job_id) {
            dismissed.push(job_id.to_string());
            log_store_failure(
                "store dismissed jobs",
                self.store.set(&StoreKey::DismissedJobs(user_id), &dismissed).await,
            );
        }

        self.clear_pending_if(&user_id, job_id).await;
        Ok(())
    }

    /// Run when the user comes back to the app: returns the job they should
    /// be asked about, if any. Candidates that were dismissed or already
    /// recorded are cleared.
    pub async fn reconcile_on_load(&self, session: Option<&AuthSession>) -> PendingConfirmation {
        let Some(session) = session else {
            return PendingConfirmation { job: None };
        };
        let user_id = session.user_id;

        let Some(job) = self.pending(&user_id).await else {
            return PendingConfirmation { job: None };
        };

        if self.dismissed(&user_id).await.iter().any(|id| *id == job.job_id) {
            self.clear_pending(&user_id).await;
            return PendingConfirmation { job: None };
        }

        match self.applied_repo.has_applied(&user_id, &job.job_id).await {
            Ok(true) => {
                self.clear_pending(&user_id).await;
                PendingConfirmation { job: None }
            }
            Ok(false) => PendingConfirmation { job: Some(job) },
            Err(e) => {
                error!("Failed to check application status for job {}: {}", job.job_id, e);
                PendingConfirmation { job: Some(job) }
            }
        }
    }

    /// "Yes, I applied".
    pub async fn confirm_application(
        &self,
        session: Option<&AuthSession>,
        request: ConfirmApplicationRequest,
    ) -> Result<AppliedJob, AppError> {
        let session = require_session(session, "track applications")?;
        request.validate()?;
        let user_id = session.user_id;

        let applied = self
            .applied_repo
            .upsert_application(&user_id, &request.job.sanitized(), request.notes)
            .await?;

        self.clear_pending_if(&user_id, &applied.job.job_id).await;
        info!("User {} confirmed application to job {}", user_id, applied.job.job_id);
        Ok(applied)
    }

    /// "I didn't apply". Nothing is recorded and the job is not asked
    /// about again.
    pub async fn decline_application(&self, session: Option<&AuthSession>, job_id: &str) -> Result<(), AppError> {
        self.dismiss(session, job_id).await
    }

    /// Most recent first, at most [`RECENTLY_VIEWED_LIMIT`] entries.
    pub async fn recently_viewed(&self, session: Option<&AuthSession>) -> Vec<JobListing> {
        match session {
            Some(session) => self.recent(&session.user_id).await,
            None => Vec::new(),
        }
    }

    /// Forgets every marker kept for the user.
    pub async fn clear_all(&self, session: Option<&AuthSession>) -> Result<(), AppError> {
        let session = require_session(session, "clear application data")?;
        let user_id = session.user_id;

        for key in [
            StoreKey::DismissedJobs(user_id),
            StoreKey::PendingConfirmation(user_id),
            StoreKey::RecentlyViewed(user_id),
        ] {
            log_store_failure("clear application data", self.store.clear(&key).await);
        }

        info!("Cleared application tracking data for user {}", user_id);
        Ok(())
    }

    async fn dismissed(&self, user_id: &Uuid) -> Vec<String> {
        self.store
            .get::<Vec<String>>(&StoreKey::DismissedJobs(*user_id))
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to read dismissed jobs for user {}: {}", user_id, e);
                None
            })
            .unwrap_or_default()
    }

    async fn recent(&self, user_id: &Uuid) -> Vec<JobListing> {
        self.store
            .get::<Vec<JobListing>>(&StoreKey::RecentlyViewed(*user_id))
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to read recently viewed jobs for user {}: {}", user_id, e);
                None
            })
            .unwrap_or_default()
    }

    async fn clear_pending(&self, user_id: &Uuid) {
        log_store_failure(
            "clear pending confirmation",
            self.store.clear(&StoreKey::PendingConfirmation(*user_id)).await,
        );
    }

    /// The stored candidate. One that no longer parses is dropped.
    async fn pending(&self, user_id: &Uuid) -> Option<JobListing> {
        match self.store.get::<JobListing>(&StoreKey::PendingConfirmation(*user_id)).await {
            Ok(pending) => pending,
            Err(e @ StoreError::Serialization(_)) => {
                warn!("Discarding unreadable pending confirmation for user {}: {}", user_id, e);
                self.clear_pending(user_id).await;
                None
            }
            Err(e) => {
                warn!("Failed to read pending confirmation for user {}: {}", user_id, e);
                None
            }
        }
    }

    async fn clear_pending_if(&self, user_id: &Uuid, job_id: &str) {
        if self.pending(user_id).await.is_some_and(|pending| pending.job_id == job_id) {
            self.clear_pending(user_id).await;
        }
    }
}

fn log_store_failure(action: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!("Failed to {}: {}", action, e);
    }
}
