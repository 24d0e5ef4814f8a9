use actix_web::web;

use crate::handlers::chat;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chat")
            .service(web::resource("").route(web::post().to(chat::chat)))
            .service(web::resource("/job-types").route(web::get().to(chat::job_types)))
            .service(web::resource("/index").route(web::post().to(chat::index_jobs)))
            .service(web::resource("/reset").route(web::post().to(chat::reset_chat)))
    );
}
