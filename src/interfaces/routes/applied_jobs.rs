use actix_web::web;

use crate::handlers::applied_jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/applied-jobs")
            .service(
                web::resource("")
                    .route(web::get().to(applied_jobs::list_applied_jobs))
                    .route(web::post().to(applied_jobs::track_application))
            )
            .service(
                web::resource("/{job_id}")
                    .route(web::get().to(applied_jobs::get_applied_job))
                    .route(web::patch().to(applied_jobs::update_application_status))
                    .route(web::delete().to(applied_jobs::remove_applied_job))
            )
            .service(
                web::resource("/{job_id}/status")
                    .route(web::get().to(applied_jobs::applied_job_status))
            )
    );
}
