use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::applied_job::{TrackApplicationRequest, UpdateApplicationRequest},
    errors::AppError,
    use_cases::extractors::OptionalClaims,
    AppState,
};

#[instrument(skip(claims, state, data))]
pub async fn track_application(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<TrackApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let applied = state
        .applied_jobs_handler
        .track_application(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(applied))
}

#[instrument(skip(claims, state))]
pub async fn list_applied_jobs(
    claims: OptionalClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let jobs = state.applied_jobs_handler.list_applied_jobs(claims.session()).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

#[instrument(skip(claims, state))]
pub async fn get_applied_job(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let applied = state
        .applied_jobs_handler
        .get_application(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::Ok().json(applied))
}

#[instrument(skip(claims, state))]
pub async fn applied_job_status(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let status = state
        .applied_jobs_handler
        .has_applied(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::Ok().json(status))
}

#[instrument(skip(claims, state, data))]
pub async fn update_application_status(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
    data: web::Json<UpdateApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let applied = state
        .applied_jobs_handler
        .update_status(claims.session(), &job_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(applied))
}

#[instrument(skip(claims, state))]
pub async fn remove_applied_job(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state
        .applied_jobs_handler
        .remove_applied_job(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
