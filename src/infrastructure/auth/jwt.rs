use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};
use uuid::Uuid;

use crate::entities::token::Claims;
use crate::errors::AuthError;
use crate::settings::{AppConfig, JwtKeys};

// Hosted auth providers sign access tokens with HS256 and the project secret.
const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    audience: String,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            audience: config.jwt_audience.clone(),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    /// Issues an access token for `user_id`. Production tokens come from
    /// the auth provider; this is used for local development and tests.
    pub fn create_jwt(&self, user_id: &Uuid, email: Option<&str>) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.map(str::to_string),
            role: Some("authenticated".to_string()),
            aud: self.audience.clone(),
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_audience(&[self.audience.as_str()]);

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AppEnvironment, LogFormat};

    fn config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/jobs".into(),
            redis_url: None,
            cors_allowed_origins: vec!["*".into()],
            jwt_secret: "test_jwt_secret_that_is_long_enough_1234567890".into(),
            jwt_audience: "authenticated".into(),
            jwt_expiration_minutes: 5,
            job_service_url: "http://localhost:8000".into(),
            job_service_timeout_secs: 5,
            recent_jobs_ttl_secs: 60,
            max_resume_bytes: 1024,
            run_migrations: false,
            log_level: "debug".into(),
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_user() {
        let service = JwtService::new(&config());
        let user_id = Uuid::new_v4();

        let token = service.create_jwt(&user_id, Some("ada@example.com")).unwrap();
        let claims = service.decode_jwt(&token).unwrap().claims;

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut cfg = config();
        cfg.jwt_expiration_minutes = -5;
        let service = JwtService::new(&cfg);

        let token = service.create_jwt(&Uuid::new_v4(), None).unwrap();

        assert!(matches!(service.decode_jwt(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn token_for_other_audience_is_rejected() {
        let mut other = config();
        other.jwt_audience = "anon".into();
        let token = JwtService::new(&other).create_jwt(&Uuid::new_v4(), None).unwrap();

        assert!(matches!(
            JwtService::new(&config()).decode_jwt(&token),
            Err(AuthError::InvalidToken)
        ));
    }
}
