use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::tracker::{ApplyClickRequest, ConfirmApplicationRequest, PromptDecision},
    errors::AppError,
    use_cases::extractors::OptionalClaims,
    AppState,
};

#[instrument(skip(claims, state, data))]
pub async fn apply_click(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<ApplyClickRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .tracker
        .record_apply_click(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(claims, state))]
pub async fn pending_confirmation(claims: OptionalClaims, state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.reconcile_on_load(claims.session()).await)
}

#[instrument(skip(claims, state))]
pub async fn should_prompt(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> impl Responder {
    let job_id = job_id.into_inner();
    let should_prompt = state.tracker.should_prompt(claims.session(), &job_id).await;

    HttpResponse::Ok().json(PromptDecision { job_id, should_prompt })
}

#[instrument(skip(claims, state, data))]
pub async fn confirm_application(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<ConfirmApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let applied = state
        .tracker
        .confirm_application(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(applied))
}

/// "I didn't apply" and "don't ask again" both land here.
#[instrument(skip(claims, state))]
pub async fn dismiss_prompt(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state
        .tracker
        .decline_application(claims.session(), &job_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(claims, state))]
pub async fn recently_viewed(claims: OptionalClaims, state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.recently_viewed(claims.session()).await)
}

#[instrument(skip(claims, state))]
pub async fn clear_tracking_data(
    claims: OptionalClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.tracker.clear_all(claims.session()).await?;
    Ok(HttpResponse::NoContent().finish())
}
