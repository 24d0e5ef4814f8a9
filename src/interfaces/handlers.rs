pub mod applied_jobs;
pub mod chat;
pub mod home;
pub mod jobs;
pub mod resume;
pub mod saved_jobs;
pub mod system;
pub mod tracker;
