//! Progress calculation and leaderboard ordering.

use chrono::{DateTime, Utc};

use crate::models::{MarkerModel, MarkerResponse, Progress, UserWithMarkers};

/// Latest event minus registration; zero when the user has no events.
pub fn compute_progress(registration_date: DateTime<Utc>, events: &[DateTime<Utc>]) -> Progress {
    match events.iter().max() {
        Some(latest) => Progress::from(*latest - registration_date),
        None => Progress::zero(),
    }
}

pub fn build_response(entry: UserWithMarkers) -> MarkerResponse {
    let timestamps: Vec<DateTime<Utc>> = entry.markers.iter().map(|m| m.date_time).collect();
    let progress = compute_progress(entry.user.registration_date, &timestamps);
    MarkerResponse {
        user_id: entry.user.id,
        user_name: entry.user.display_name(),
        progress,
        markers: entry.markers.into_iter().map(MarkerModel::from).collect(),
    }
}

/// Most markers first, then least elapsed time. Stable for ties.
pub fn rank(responses: &mut [MarkerResponse]) {
    responses.sort_by(|a, b| {
        b.markers
            .len()
            .cmp(&a.markers.len())
            .then_with(|| a.progress.cmp(&b.progress))
    });
}

/// Build and rank the leaderboard for a set of active users.
pub fn leaderboard(entries: Vec<UserWithMarkers>) -> Vec<MarkerResponse> {
    let mut responses: Vec<MarkerResponse> = entries.into_iter().map(build_response).collect();
    rank(&mut responses);
    responses
}
