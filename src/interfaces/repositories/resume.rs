use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    entities::resume::{ResumeData, ResumeProfile, ResumeProfileRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Overwrites the parsed resume for `user_id`, keeping any preferred
    /// location already stored.
    async fn upsert_profile(&self, user_id: &Uuid, resume: &ResumeData) -> Result<ResumeProfile, AppError>;
    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<ResumeProfile>, AppError>;
    /// Creates an empty profile when none exists yet.
    async fn set_preferred_location(&self, user_id: &Uuid, location: &str) -> Result<ResumeProfile, AppError>;
    async fn delete_profile(&self, user_id: &Uuid) -> Result<u64, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn upsert_profile(&self, user_id: &Uuid, resume: &ResumeData) -> Result<ResumeProfile, AppError> {
        let row = sqlx::query_as::<_, ResumeProfileRow>(
            r#"
            INSERT INTO resume_profiles (user_id, resume_data)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET
                resume_data = EXCLUDED.resume_data,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Json(resume))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<ResumeProfile>, AppError> {
        let row = sqlx::query_as::<_, ResumeProfileRow>(
            "SELECT * FROM resume_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ResumeProfile::from))
    }

    async fn set_preferred_location(&self, user_id: &Uuid, location: &str) -> Result<ResumeProfile, AppError> {
        let row = sqlx::query_as::<_, ResumeProfileRow>(
            r#"
            INSERT INTO resume_profiles (user_id, resume_data, preferred_location)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET
                preferred_location = EXCLUDED.preferred_location,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Json(ResumeData::default()))
        .bind(location)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn delete_profile(&self, user_id: &Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM resume_profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
