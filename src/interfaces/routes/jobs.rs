use actix_web::web;

use crate::handlers::jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .service(web::resource("/search").route(web::get().to(jobs::search_jobs)))
            .service(web::resource("/recommended").route(web::get().to(jobs::recommended_jobs)))
    );
}
