//! Marker endpoints: catalogue and recording events.

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use tracing::info;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::{AuthUser, UserIdPath};
use crate::models::{MarkerInfo, MarkerModel, RecordMarkerRequest};

/// GET /api/marker
pub async fn list_markers(State(state): State<AppState>) -> Result<Json<Vec<MarkerInfo>>, AppError> {
    let rows = state.store().list_markers().await?;
    Ok(Json(rows.into_iter().map(MarkerInfo::from).collect()))
}

/// POST /api/user/:id/markers — the token must belong to user `id`.
pub async fn record_marker(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    auth: AuthUser,
    WithRejection(Json(body), _): WithRejection<Json<RecordMarkerRequest>, AppError>,
) -> Result<Json<MarkerModel>, AppError> {
    let entry = state
        .store()
        .active_user_with_markers(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id '{}' doesn't exist", id)))?;
    if entry.user.email.to_lowercase() != auth.email().to_lowercase() {
        return Err(AppError::Forbidden(
            "Token does not belong to this user".to_string(),
        ));
    }

    let marker = state
        .store()
        .find_marker(body.marker_id.trim())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Marker '{}' doesn't exist", body.marker_id))
        })?;

    let now = Utc::now();
    state.store().record_marker(id, marker.id, now).await?;
    info!(user_id = id, marker = %marker.key, "marker recorded");

    Ok(Json(MarkerModel {
        marker_id: marker.key,
        letter: marker.value,
        timestamp: now,
    }))
}
