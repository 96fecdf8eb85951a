//! JWT issue and validation.

use crate::config::TokenSettings;
use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // email
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signs and checks HS256 tokens for one issuer/audience pair.
#[derive(Clone)]
pub struct JwtIssuer {
    settings: Arc<TokenSettings>,
}

impl JwtIssuer {
    pub fn new(settings: TokenSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn issue(&self, subject: &str) -> AppResult<String> {
        let now = Utc::now();
        let exp = (now + Duration::days(self.settings.ttl_days)).timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.audience.clone(),
            exp,
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.key.as_bytes()),
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_issuer(&[&self.settings.issuer]);
        validation.set_audience(&[&self.settings.audience]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.key.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(data.claims)
    }
}
