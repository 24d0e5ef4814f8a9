pub mod applied_job;
pub mod chat;
pub mod job_listing;
pub mod navigation;
pub mod resume;
pub mod saved_job;
pub mod search;
pub mod token;
pub mod tracker;
