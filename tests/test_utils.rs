#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use chrono::Utc;
use jobfinder_backend::{
    auth::jwt::JwtService,
    entities::{
        applied_job::{AppliedJob, ApplicationStatus},
        chat::{ChatReply, ChatRequest, IndexJobsRequest, JobSource},
        job_listing::JobListing,
        resume::{ResumeData, ResumeProfile},
        saved_job::SavedJob,
    },
    errors::{AppError, ClientError},
    middlewares::auth::AuthMiddleware,
    repositories::{
        applied_job::AppliedJobRepository, job_data::JobDataService, resume::ResumeRepository,
        saved_job::SavedJobRepository,
    },
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment, LogFormat},
    store::memory::InMemoryStore,
    utils::upload::ResumeUpload,
    AppState, Backends,
};
use parking_lot::Mutex;
use reqwest::Client;
use std::{collections::HashMap, net::TcpListener, sync::Arc, time::Duration};
use uuid::Uuid;

// ───── In-memory repositories ──────────────────────────────────────────

#[derive(Default)]
pub struct InMemorySavedJobs {
    rows: Mutex<Vec<SavedJob>>,
}

#[async_trait]
impl SavedJobRepository for InMemorySavedJobs {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn upsert_saved_job(&self, user_id: &Uuid, job: &JobListing) -> Result<SavedJob, AppError> {
        let mut rows = self.rows.lock();
        rows.retain(|r| !(r.user_id == *user_id && r.job.job_id == job.job_id));

        let saved = SavedJob {
            user_id: *user_id,
            job: job.clone(),
            saved_at: Utc::now(),
        };
        rows.push(saved.clone());
        Ok(saved)
    }

    async fn is_job_saved(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .any(|r| r.user_id == *user_id && r.job.job_id == job_id))
    }

    async fn list_saved_jobs(&self, user_id: &Uuid) -> Result<Vec<SavedJob>, AppError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .rev()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn delete_saved_job(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|r| !(r.user_id == *user_id && r.job.job_id == job_id));
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryAppliedJobs {
    rows: Mutex<Vec<AppliedJob>>,
}

impl InMemoryAppliedJobs {
    pub fn count(&self, user_id: &Uuid) -> usize {
        self.rows.lock().iter().filter(|r| r.user_id == *user_id).count()
    }
}

#[async_trait]
impl AppliedJobRepository for InMemoryAppliedJobs {
    async fn upsert_application(
        &self,
        user_id: &Uuid,
        job: &JobListing,
        notes: Option<String>,
    ) -> Result<AppliedJob, AppError> {
        let mut rows = self.rows.lock();
        let applied_at = rows
            .iter()
            .find(|r| r.user_id == *user_id && r.job.job_id == job.job_id)
            .map(|r| r.applied_at)
            .unwrap_or_else(Utc::now);
        rows.retain(|r| !(r.user_id == *user_id && r.job.job_id == job.job_id));

        let applied = AppliedJob {
            user_id: *user_id,
            job: job.clone(),
            application_status: ApplicationStatus::Applied,
            notes,
            applied_at,
        };
        rows.push(applied.clone());
        Ok(applied)
    }

    async fn update_application(
        &self,
        user_id: &Uuid,
        job_id: &str,
        status: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<Option<AppliedJob>, AppError> {
        let mut rows = self.rows.lock();
        let Some(row) = rows
            .iter_mut()
            .find(|r| r.user_id == *user_id && r.job.job_id == job_id)
        else {
            return Ok(None);
        };

        row.application_status = status;
        if notes.is_some() {
            row.notes = notes;
        }
        Ok(Some(row.clone()))
    }

    async fn get_application(&self, user_id: &Uuid, job_id: &str) -> Result<Option<AppliedJob>, AppError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .find(|r| r.user_id == *user_id && r.job.job_id == job_id)
            .cloned())
    }

    async fn has_applied(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError> {
        Ok(self.get_application(user_id, job_id).await?.is_some())
    }

    async fn list_applications(&self, user_id: &Uuid) -> Result<Vec<AppliedJob>, AppError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .rev()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn delete_application(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|r| !(r.user_id == *user_id && r.job.job_id == job_id));
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryResumes {
    rows: Mutex<HashMap<Uuid, ResumeProfile>>,
}

#[async_trait]
impl ResumeRepository for InMemoryResumes {
    async fn upsert_profile(&self, user_id: &Uuid, resume: &ResumeData) -> Result<ResumeProfile, AppError> {
        let now = Utc::now();
        let mut rows = self.rows.lock();
        let profile = rows.entry(*user_id).or_insert_with(|| ResumeProfile {
            user_id: *user_id,
            resume: ResumeData::default(),
            preferred_location: None,
            created_at: now,
            updated_at: now,
        });
        profile.resume = resume.clone();
        profile.updated_at = now;
        Ok(profile.clone())
    }

    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<ResumeProfile>, AppError> {
        Ok(self.rows.lock().get(user_id).cloned())
    }

    async fn set_preferred_location(&self, user_id: &Uuid, location: &str) -> Result<ResumeProfile, AppError> {
        let now = Utc::now();
        let mut rows = self.rows.lock();
        let profile = rows.entry(*user_id).or_insert_with(|| ResumeProfile {
            user_id: *user_id,
            resume: ResumeData::default(),
            preferred_location: None,
            created_at: now,
            updated_at: now,
        });
        profile.preferred_location = Some(location.to_string());
        profile.updated_at = now;
        Ok(profile.clone())
    }

    async fn delete_profile(&self, user_id: &Uuid) -> Result<u64, AppError> {
        Ok(self.rows.lock().remove(user_id).map_or(0, |_| 1))
    }
}

// ───── Job service stub ───────────────────────────────────────────────

/// Answers every call with canned data and remembers the searches it saw.
#[derive(Default)]
pub struct StubJobService {
    pub jobs: Vec<JobListing>,
    pub resume: ResumeData,
    pub searches: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl JobDataService for StubJobService {
    async fn parse_resume(&self, _upload: ResumeUpload) -> Result<ResumeData, ClientError> {
        Ok(self.resume.clone())
    }

    async fn search_jobs(&self, role: &str, location: &str) -> Result<Vec<JobListing>, ClientError> {
        self.searches.lock().push((role.to_string(), location.to_string()));
        Ok(self.jobs.clone())
    }

    async fn job_types(&self) -> Result<Vec<String>, ClientError> {
        Ok(vec!["software engineer".into(), "data analyst".into()])
    }

    async fn index_jobs(&self, request: &IndexJobsRequest) -> Result<serde_json::Value, ClientError> {
        Ok(serde_json::json!({"status": "indexing", "job_type": request.job_type}))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        Ok(ChatReply {
            response: format!("Here is what I found about {}", request.job_type),
            sources: vec![
                JobSource {
                    job_id: "low".into(),
                    job_title: "Junior".into(),
                    employer: "A".into(),
                    relevance_score: 0.2,
                },
                JobSource {
                    job_id: "high".into(),
                    job_title: "Senior".into(),
                    employer: "B".into(),
                    relevance_score: 0.9,
                },
            ],
            error: None,
        })
    }

    async fn reset_chat(&self) -> Result<(), ClientError> {
        Ok(())
    }
}

// ───── Test application ───────────────────────────────────────────────

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Job Finder Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://unused/test_db".into(),
        redis_url: None,
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs256_1234567890".into(),
        jwt_audience: "authenticated".into(),
        jwt_expiration_minutes: 5,
        job_service_url: "http://127.0.0.1:9".into(),
        job_service_timeout_secs: 5,
        recent_jobs_ttl_secs: 3600,
        max_resume_bytes: 1024 * 1024,
        run_migrations: false,
        log_level: "debug".into(),
        log_format: LogFormat::Pretty,
    }
}

pub struct TestBackends {
    pub saved_jobs: Arc<InMemorySavedJobs>,
    pub applied_jobs: Arc<InMemoryAppliedJobs>,
    pub resumes: Arc<InMemoryResumes>,
    pub store: Arc<InMemoryStore>,
    pub job_service: Arc<StubJobService>,
}

impl TestBackends {
    pub fn new(job_service: StubJobService) -> Self {
        TestBackends {
            saved_jobs: Arc::new(InMemorySavedJobs::default()),
            applied_jobs: Arc::new(InMemoryAppliedJobs::default()),
            resumes: Arc::new(InMemoryResumes::default()),
            store: Arc::new(InMemoryStore::new()),
            job_service: Arc::new(job_service),
        }
    }

    pub fn backends(&self) -> Backends {
        Backends {
            saved_jobs: self.saved_jobs.clone(),
            applied_jobs: self.applied_jobs.clone(),
            resumes: self.resumes.clone(),
            store: self.store.clone(),
            job_service: self.job_service.clone(),
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub jwt: JwtService,
    pub backends: TestBackends,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(StubJobService::default()).await
    }

    pub async fn spawn_with(job_service: StubJobService) -> Self {
        Self::spawn_with_config(test_config(), job_service).await
    }

    pub async fn spawn_with_config(config: AppConfig, job_service: StubJobService) -> Self {
        let max_resume_bytes = config.max_resume_bytes;
        let backends = TestBackends::new(job_service);
        let state = web::Data::new(AppState::new(&config, backends.backends()));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(AuthMiddleware)
                .wrap(NormalizePath::trim())
                .configure(configure_routes(max_resume_bytes))
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        actix_rt::spawn(server);

        let client = Client::new();
        while client.get(&address).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        TestApp {
            address,
            client,
            jwt: JwtService::new(&config),
            backends,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn token_for(&self, user_id: &Uuid) -> String {
        self.jwt
            .create_jwt(user_id, Some("jane@example.com"))
            .expect("Failed to create test token")
    }
}
