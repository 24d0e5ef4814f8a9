use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod applied_jobs;
mod chat;
mod extractor_errors;
mod jobs;
mod resume;
mod saved_jobs;
mod tracker;

/// Registers every route. Multipart bodies larger than `max_resume_bytes`
/// are rejected while they are read.
pub fn configure_routes(max_resume_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(home);

        cfg.service(
            web::scope("/api/v1")
                .service(health_check)
                .configure(saved_jobs::config_routes)
                .configure(applied_jobs::config_routes)
                .configure(tracker::config_routes)
                .configure(resume::config_routes)
                .configure(jobs::config_routes)
                .configure(chat::config_routes),
        );

        cfg.configure(|cfg| extractor_errors::config_routes(cfg, max_resume_bytes));
    }
}
