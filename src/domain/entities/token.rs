use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AuthError;

/// Claims carried by access tokens from the hosted auth provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
}

/// The authenticated user behind a request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl TryFrom<&Claims> for AuthSession {
    type Error = AuthError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;
        Ok(AuthSession {
            user_id,
            email: claims.email.clone(),
        })
    }
}
