use actix_web::web;

use crate::handlers::tracker;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tracker")
            .service(
                web::resource("")
                    .route(web::delete().to(tracker::clear_tracking_data))
            )
            .service(web::resource("/apply-click").route(web::post().to(tracker::apply_click)))
            .service(web::resource("/pending").route(web::get().to(tracker::pending_confirmation)))
            .service(web::resource("/prompt/{job_id}").route(web::get().to(tracker::should_prompt)))
            .service(web::resource("/confirm").route(web::post().to(tracker::confirm_application)))
            .service(web::resource("/dismiss/{job_id}").route(web::post().to(tracker::dismiss_prompt)))
            .service(web::resource("/recent").route(web::get().to(tracker::recently_viewed)))
    );
}
