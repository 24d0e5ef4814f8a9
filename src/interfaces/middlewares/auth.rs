use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse, ResponseError,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{entities::token::Claims, errors::AuthError, AppState};

/// Decodes the bearer token when one is sent and attaches its [`Claims`]
/// to the request. Requests without an `Authorization` header pass through
/// anonymously; a malformed, invalid or expired token is rejected with 401.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if req.method().as_str() == "OPTIONS" {
                return service.call(req).await;
            }

            let token = match extract_token(&req) {
                Ok(Some(token)) => token,
                Ok(None) => return service.call(req).await,
                Err(e) => {
                    tracing::warn!("Malformed Authorization header on {}", req.path());
                    return Ok(custom_error_response(req, e.error_response()));
                }
            };

            match decode_claims(&req, &token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!("Rejected bearer token on {}: {}", req.path(), e);
                    Ok(custom_error_response(req, e.error_response()))
                }
            }
        })
    }
}

/// `Ok(None)` when no `Authorization` header is present.
fn extract_token(req: &ServiceRequest) -> Result<Option<String>, AuthError> {
    let Some(header) = req.headers().get("Authorization") else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| AuthError::MissingCredentials)?;
    let parts: Vec<&str> = header.split_whitespace().collect();
    if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
        Ok(Some(parts[1].to_string()))
    } else {
        Err(AuthError::MissingCredentials)
    }
}

fn decode_claims(req: &ServiceRequest, token: &str) -> Result<Claims, AuthError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState missing in middleware");
        AuthError::MissingJwtService
    })?;

    let decoded = state.jwt_service.decode_jwt(token)?;
    Ok(decoded.claims)
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}
