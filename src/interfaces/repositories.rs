pub mod applied_job;
pub mod job_data;
pub mod local_store;
pub mod resume;
pub mod saved_job;
pub mod sqlx_repo;
