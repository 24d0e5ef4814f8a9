use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    entities::{
        applied_job::{AppliedJob, AppliedJobRow, ApplicationStatus},
        job_listing::JobListing,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxAppliedJobRepo,
};

#[async_trait]
pub trait AppliedJobRepository: Send + Sync {
    /// Records an application for `(user_id, job.job_id)` with status
    /// `Applied`. An existing record is refreshed; its `applied_at` is kept.
    async fn upsert_application(
        &self,
        user_id: &Uuid,
        job: &JobListing,
        notes: Option<String>,
    ) -> Result<AppliedJob, AppError>;

    /// Returns `None` when the user has no application for `job_id`.
    /// `notes: None` leaves the stored notes untouched.
    async fn update_application(
        &self,
        user_id: &Uuid,
        job_id: &str,
        status: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<Option<AppliedJob>, AppError>;

    async fn get_application(&self, user_id: &Uuid, job_id: &str) -> Result<Option<AppliedJob>, AppError>;
    async fn has_applied(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError>;
    /// Newest first.
    async fn list_applications(&self, user_id: &Uuid) -> Result<Vec<AppliedJob>, AppError>;
    async fn delete_application(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError>;
}

impl SqlxAppliedJobRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAppliedJobRepo { pool }
    }
}

#[async_trait]
impl AppliedJobRepository for SqlxAppliedJobRepo {
    async fn upsert_application(
        &self,
        user_id: &Uuid,
        job: &JobListing,
        notes: Option<String>,
    ) -> Result<AppliedJob, AppError> {
        let row = sqlx::query_as::<_, AppliedJobRow>(
            r#"
            INSERT INTO applied_jobs (
                user_id, job_id, job_title, employer_name, employer_logo,
                job_location, job_city, job_state, job_apply_link, job_description,
                job_posted_human_readable, job_employment_type_text, job_is_remote,
                job_highlights, job_salary, job_min_salary, job_max_salary,
                application_status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            ON CONFLICT (user_id, job_id) DO UPDATE SET
                job_title = EXCLUDED.job_title,
                employer_name = EXCLUDED.employer_name,
                employer_logo = EXCLUDED.employer_logo,
                job_location = EXCLUDED.job_location,
                job_city = EXCLUDED.job_city,
                job_state = EXCLUDED.job_state,
                job_apply_link = EXCLUDED.job_apply_link,
                job_description = EXCLUDED.job_description,
                job_posted_human_readable = EXCLUDED.job_posted_human_readable,
                job_employment_type_text = EXCLUDED.job_employment_type_text,
                job_is_remote = EXCLUDED.job_is_remote,
                job_highlights = EXCLUDED.job_highlights,
                job_salary = EXCLUDED.job_salary,
                job_min_salary = EXCLUDED.job_min_salary,
                job_max_salary = EXCLUDED.job_max_salary,
                application_status = EXCLUDED.application_status,
                notes = EXCLUDED.notes
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&job.job_id)
        .bind(&job.job_title)
        .bind(&job.employer_name)
        .bind(&job.employer_logo)
        .bind(&job.job_location)
        .bind(&job.job_city)
        .bind(&job.job_state)
        .bind(&job.job_apply_link)
        .bind(&job.job_description)
        .bind(&job.job_posted_human_readable)
        .bind(&job.job_employment_type_text)
        .bind(job.job_is_remote)
        .bind(Json(&job.job_highlights))
        .bind(&job.job_salary)
        .bind(job.job_min_salary)
        .bind(job.job_max_salary)
        .bind(ApplicationStatus::Applied.as_str())
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_application(
        &self,
        user_id: &Uuid,
        job_id: &str,
        status: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<Option<AppliedJob>, AppError> {
        let row = sqlx::query_as::<_, AppliedJobRow>(
            r#"
            UPDATE applied_jobs
            SET
                application_status = $3,
                notes = COALESCE($4, notes)
            WHERE user_id = $1 AND job_id = $2
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(job_id)
        .bind(status.as_str())
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AppliedJob::from))
    }

    async fn get_application(&self, user_id: &Uuid, job_id: &str) -> Result<Option<AppliedJob>, AppError> {
        let row = sqlx::query_as::<_, AppliedJobRow>(
            "SELECT * FROM applied_jobs WHERE user_id = $1 AND job_id = $2",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AppliedJob::from))
    }

    async fn has_applied(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM applied_jobs WHERE user_id = $1 AND job_id = $2)",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list_applications(&self, user_id: &Uuid) -> Result<Vec<AppliedJob>, AppError> {
        let jobs = sqlx::query_as::<_, AppliedJobRow>(
            "SELECT * FROM applied_jobs WHERE user_id = $1 ORDER BY applied_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(AppliedJob::from)
        .collect();

        Ok(jobs)
    }

    async fn delete_application(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM applied_jobs WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
