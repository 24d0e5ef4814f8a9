use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::job_listing::JobListing, errors::AppError, use_cases::extractors::OptionalClaims, AppState};

#[instrument(skip(claims, state, data))]
pub async fn save_job(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<JobListing>,
) -> Result<impl Responder, AppError> {
    let saved = state
        .saved_jobs_handler
        .save_job(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(saved))
}

#[instrument(skip(claims, state))]
pub async fn list_saved_jobs(
    claims: OptionalClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let jobs = state.saved_jobs_handler.list_saved_jobs(claims.session()).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

#[instrument(skip(claims, state))]
pub async fn saved_job_status(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let status = state
        .saved_jobs_handler
        .is_job_saved(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::Ok().json(status))
}

#[instrument(skip(claims, state, data))]
pub async fn toggle_saved_job(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<JobListing>,
) -> Result<impl Responder, AppError> {
    let status = state
        .saved_jobs_handler
        .toggle_saved(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(status))
}

#[instrument(skip(claims, state))]
pub async fn remove_saved_job(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state
        .saved_jobs_handler
        .remove_saved_job(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
