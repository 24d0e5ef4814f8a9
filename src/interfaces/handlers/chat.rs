use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::chat::{ChatRequest, IndexJobsRequest, JobTypes},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn job_types(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let job_types = state.chat_handler.job_types().await?;
    Ok(HttpResponse::Ok().json(JobTypes { job_types }))
}

#[instrument(skip(state, data))]
pub async fn index_jobs(
    state: web::Data<AppState>,
    data: web::Json<IndexJobsRequest>,
) -> Result<impl Responder, AppError> {
    let ack = state.chat_handler.index_jobs(data.into_inner()).await?;
    Ok(HttpResponse::Accepted().json(ack))
}

#[instrument(skip(state, data))]
pub async fn chat(
    state: web::Data<AppState>,
    data: web::Json<ChatRequest>,
) -> Result<impl Responder, AppError> {
    let reply = state.chat_handler.chat(data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

#[instrument(skip(state))]
pub async fn reset_chat(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    state.chat_handler.reset_chat().await?;
    Ok(HttpResponse::NoContent().finish())
}
