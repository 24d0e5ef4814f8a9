use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::search::{JobSearchQuery, RoleSearchQuery},
    errors::AppError,
    use_cases::extractors::OptionalClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn search_jobs(
    state: web::Data<AppState>,
    query: web::Query<JobSearchQuery>,
) -> Result<impl Responder, AppError> {
    let jobs = state.job_search_handler.search_jobs(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// Listings for a recommended role, or a request for a location.
#[instrument(skip(claims, state))]
pub async fn recommended_jobs(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    query: web::Query<RoleSearchQuery>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .job_search_handler
        .search_for_role(claims.session(), query.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}
