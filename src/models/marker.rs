//! Markers, marker events, and the per-user progress response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::progress::Progress;

#[derive(Debug, Clone, FromRow)]
pub struct MarkerRow {
    pub id: i32,
    pub key: String,
    /// The marker's letter.
    pub value: String,
}

/// One marker collected by a user, joined with the marker it references.
#[derive(Debug, Clone, FromRow)]
pub struct UserMarkerEvent {
    pub user_id: i32,
    pub marker_key: String,
    pub letter: String,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerModel {
    pub marker_id: String,
    pub letter: String,
    pub timestamp: DateTime<Utc>,
}

impl From<UserMarkerEvent> for MarkerModel {
    fn from(e: UserMarkerEvent) -> Self {
        Self {
            marker_id: e.marker_key,
            letter: e.letter,
            timestamp: e.date_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerResponse {
    pub user_id: i32,
    pub user_name: String,
    pub progress: Progress,
    pub markers: Vec<MarkerModel>,
}

/// Entry of `GET /api/marker`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerInfo {
    pub marker_id: String,
    pub letter: String,
}

impl From<MarkerRow> for MarkerInfo {
    fn from(r: MarkerRow) -> Self {
        Self {
            marker_id: r.key,
            letter: r.value,
        }
    }
}

/// Body of `POST /api/user/{id}/markers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMarkerRequest {
    #[serde(alias = "key")]
    pub marker_id: String,
}
