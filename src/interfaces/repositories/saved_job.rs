use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    entities::{job_listing::JobListing, saved_job::{SavedJob, SavedJobRow}},
    errors::AppError,
    repositories::sqlx_repo::SqlxSavedJobRepo,
};

#[async_trait]
pub trait SavedJobRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    /// Inserts or refreshes the bookmark for `(user_id, job.job_id)`.
    async fn upsert_saved_job(&self, user_id: &Uuid, job: &JobListing) -> Result<SavedJob, AppError>;
    async fn is_job_saved(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError>;
    /// Newest first.
    async fn list_saved_jobs(&self, user_id: &Uuid) -> Result<Vec<SavedJob>, AppError>;
    /// Returns the number of rows removed.
    async fn delete_saved_job(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError>;
}

impl SqlxSavedJobRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSavedJobRepo { pool }
    }
}

#[async_trait]
impl SavedJobRepository for SqlxSavedJobRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn upsert_saved_job(&self, user_id: &Uuid, job: &JobListing) -> Result<SavedJob, AppError> {
        let row = sqlx::query_as::<_, SavedJobRow>(
            r#"
            INSERT INTO saved_jobs (
                user_id, job_id, job_title, employer_name, employer_logo,
                job_location, job_city, job_state, job_apply_link, job_description,
                job_posted_human_readable, job_employment_type_text, job_is_remote,
                job_highlights, job_salary, job_min_salary, job_max_salary, saved_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, NOW())
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
                saved_at = EXCLUDED.saved_at
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
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn is_job_saved(&self, user_id: &Uuid, job_id: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM saved_jobs WHERE user_id = $1 AND job_id = $2)",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list_saved_jobs(&self, user_id: &Uuid) -> Result<Vec<SavedJob>, AppError> {
        let jobs = sqlx::query_as::<_, SavedJobRow>(
            "SELECT * FROM saved_jobs WHERE user_id = $1 ORDER BY saved_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(SavedJob::from)
        .collect();

        Ok(jobs)
    }

    async fn delete_saved_job(&self, user_id: &Uuid, job_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
