use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::resume::{ResumeUploadForm, SetLocationRequest},
    errors::AppError,
    use_cases::extractors::OptionalClaims,
    utils::upload::read_resume_file,
    AppState,
};

#[instrument(skip(claims, state, form))]
pub async fn upload_resume(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    form: MultipartForm<ResumeUploadForm>,
) -> Result<impl Responder, AppError> {
    let form = form.into_inner();

    let upload = read_resume_file(
        form.file.file_name.as_deref(),
        form.file.file.path(),
        state.max_resume_bytes,
    )
    .await?;

    let response = state
        .resume_handler
        .parse_resume(claims.session(), upload)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(claims, state))]
pub async fn get_resume(
    claims: OptionalClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let session = claims.session();
    let profile = state.resume_handler.get_profile(session).await?;

    // Anonymous callers get `null`; a signed-in user without a resume gets 404.
    if session.is_some() && profile.is_none() {
        return Err(AppError::NotFound("No resume profile found".into()));
    }

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn set_preferred_location(
    claims: OptionalClaims,
    state: web::Data<AppState>,
    data: web::Json<SetLocationRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .resume_handler
        .set_preferred_location(claims.session(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state))]
pub async fn delete_resume(
    claims: OptionalClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.resume_handler.delete_profile(claims.session()).await?;
    Ok(HttpResponse::NoContent().finish())
}
