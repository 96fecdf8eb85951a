//! User endpoints: leaderboard, single-user progress, registration.

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use tracing::info;

use crate::auth::AuthAppService;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::{AuthUser, UserIdPath};
use crate::models::{CreatedUser, MarkerResponse, NewUser, UserRequest};
use crate::services::{build_response, leaderboard};

/// GET /api/user — every active user, ranked.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<MarkerResponse>>, AppError> {
    let entries = state.store().active_users_with_markers().await?;
    Ok(Json(leaderboard(entries)))
}

/// GET /api/user/:id — requires a bearer token. A non-integer id is a 404
/// whether or not a token was sent.
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    _auth: AuthUser,
) -> Result<Json<MarkerResponse>, AppError> {
    let entry = state
        .store()
        .active_user_with_markers(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id '{}' doesn't exist", id)))?;
    Ok(Json(build_response(entry)))
}

/// POST /api/user — register and receive a token.
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<UserRequest>, AppError>,
) -> Result<Json<CreatedUser>, AppError> {
    let body = body.normalized();
    AuthAppService::validate_registration(&body)?;
    let email = body.email;

    if state.store().find_active_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(format!("'{}' already exists", email)));
    }

    let token = state.jwt().issue(&email)?;
    let user = state
        .store()
        .create_user(NewUser {
            first_name: body.first_name,
            last_name: body.last_name,
            email,
            registration_date: Utc::now(),
            token,
        })
        .await?;

    info!(user_id = user.id, "user registered");
    Ok(Json(CreatedUser {
        id: user.id,
        token: user.token,
    }))
}
