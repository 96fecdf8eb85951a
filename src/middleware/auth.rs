//! Auth extractor: bearer JWT on protected routes.

use axum::RequestPartsExt;
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::debug;

use crate::auth::Claims;
use crate::error::AppError;
use crate::handlers::http::AppState;

/// Extractor: validated claims from the `Authorization: Bearer` header.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Email the token was issued for.
    pub fn email(&self) -> &str {
        &self.0.sub
    }
}

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                debug!("rejected request: missing bearer token");
                AppError::Auth("Missing or invalid Authorization header".to_string())
            })?;
        let claims = state.jwt().validate(bearer.token())?;
        Ok(AuthUser(claims))
    }
}
