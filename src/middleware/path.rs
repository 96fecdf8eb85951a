//! Path extractor for `/api/user/:id` routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// A user id taken from the path. Anything that is not an `i32` matches no
/// user, so it is rejected as not found rather than as a bad request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserIdPath(pub i32);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for UserIdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        parse_user_id(&raw).map(UserIdPath)
    }
}

pub fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("User with id '{}' doesn't exist", raw)))
}
