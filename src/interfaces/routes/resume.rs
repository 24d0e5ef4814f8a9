use actix_web::web;

use crate::handlers::resume;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/resume")
            .service(
                web::resource("")
                    .route(web::post().to(resume::upload_resume))
                    .route(web::get().to(resume::get_resume))
                    .route(web::delete().to(resume::delete_resume))
            )
            .service(
                web::resource("/location")
                    .route(web::put().to(resume::set_preferred_location))
            )
    );
}
