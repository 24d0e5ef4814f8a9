use actix_web::web;

use crate::handlers::saved_jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/saved-jobs")
            .service(
                web::resource("")
                    .route(web::get().to(saved_jobs::list_saved_jobs))
                    .route(web::post().to(saved_jobs::save_job))
            )
            .service(
                web::resource("/toggle")
                    .route(web::post().to(saved_jobs::toggle_saved_job))
            )
            .service(
                web::resource("/{job_id}")
                    .route(web::get().to(saved_jobs::saved_job_status))
                    .route(web::delete().to(saved_jobs::remove_saved_job))
            )
    );
}
