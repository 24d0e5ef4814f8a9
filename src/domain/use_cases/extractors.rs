use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::entities::token::{AuthSession, Claims};

/// The session of the caller, if a valid bearer token was sent.
///
/// The auth middleware has already rejected bad tokens, so a missing
/// session here simply means an anonymous request. Use cases decide what
/// anonymous callers may do.
/// Usage: add `claims: OptionalClaims` to the handler and pass
/// `claims.session()` down.
#[derive(Debug, Default)]
pub struct OptionalClaims(pub Option<AuthSession>);

impl OptionalClaims {
    pub fn session(&self) -> Option<&AuthSession> {
        self.0.as_ref()
    }
}

impl FromRequest for OptionalClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(
                AuthSession::try_from(claims)
                    .map(|session| OptionalClaims(Some(session)))
                    .map_err(actix_web::Error::from),
            ),
            None => ready(Ok(OptionalClaims(None))),
        }
    }
}
