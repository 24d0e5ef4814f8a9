use std::{sync::Arc, time::Duration};

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, clients, db, store, utils};

use auth::jwt::JwtService;
use repositories::{
    applied_job::AppliedJobRepository,
    job_data::JobDataService,
    local_store::{LocalStore, TypedStore},
    resume::ResumeRepository,
    saved_job::SavedJobRepository,
    sqlx_repo::{SqlxAppliedJobRepo, SqlxResumeRepo, SqlxSavedJobRepo},
};
use use_cases::{
    applied_jobs::AppliedJobsHandler, chat::ChatHandler, job_search::JobSearchHandler,
    resume::ResumeHandler, saved_jobs::SavedJobsHandler, tracker::ApplicationTracker,
};

pub type AppSavedJobsHandler = SavedJobsHandler<dyn SavedJobRepository>;
pub type AppAppliedJobsHandler = AppliedJobsHandler<dyn AppliedJobRepository>;
pub type AppTracker = ApplicationTracker<dyn AppliedJobRepository, dyn LocalStore>;
pub type AppResumeHandler = ResumeHandler<dyn ResumeRepository, dyn JobDataService>;
pub type AppJobSearchHandler = JobSearchHandler<dyn ResumeRepository, dyn JobDataService>;
pub type AppChatHandler = ChatHandler<dyn JobDataService>;

/// Backends the use cases run against. Production wires the sqlx
/// repositories; tests pass in-memory ones.
pub struct Backends {
    pub saved_jobs: Arc<dyn SavedJobRepository>,
    pub applied_jobs: Arc<dyn AppliedJobRepository>,
    pub resumes: Arc<dyn ResumeRepository>,
    pub store: Arc<dyn LocalStore>,
    pub job_service: Arc<dyn JobDataService>,
}

impl Backends {
    pub fn postgres(
        pool: sqlx::PgPool,
        store: Arc<dyn LocalStore>,
        job_service: Arc<dyn JobDataService>,
    ) -> Self {
        Backends {
            saved_jobs: Arc::new(SqlxSavedJobRepo::new(pool.clone())),
            applied_jobs: Arc::new(SqlxAppliedJobRepo::new(pool.clone())),
            resumes: Arc::new(SqlxResumeRepo::new(pool)),
            store,
            job_service,
        }
    }
}

pub struct AppState {
    pub jwt_service: JwtService,
    pub saved_jobs_handler: AppSavedJobsHandler,
    pub applied_jobs_handler: AppAppliedJobsHandler,
    pub tracker: AppTracker,
    pub resume_handler: AppResumeHandler,
    pub job_search_handler: AppJobSearchHandler,
    pub chat_handler: AppChatHandler,
    pub max_resume_bytes: usize,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, backends: Backends) -> Self {
        let store = TypedStore::new(
            backends.store,
            Duration::from_secs(config.recent_jobs_ttl_secs),
        );

        AppState {
            jwt_service: JwtService::new(config),
            saved_jobs_handler: SavedJobsHandler::new(backends.saved_jobs),
            applied_jobs_handler: AppliedJobsHandler::new(Arc::clone(&backends.applied_jobs)),
            tracker: ApplicationTracker::new(backends.applied_jobs, store),
            resume_handler: ResumeHandler::new(
                Arc::clone(&backends.resumes),
                Arc::clone(&backends.job_service),
            ),
            job_search_handler: JobSearchHandler::new(backends.resumes, Arc::clone(&backends.job_service)),
            chat_handler: ChatHandler::new(backends.job_service),
            max_resume_bytes: config.max_resume_bytes,
        }
    }
}
