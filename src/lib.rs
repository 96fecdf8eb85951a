//! User registration and marker progress tracking API.
//!
//! Users register with a name and email and receive a JWT. Markers are named
//! milestones; a user's progress is the time from registration to their most
//! recent marker event. The leaderboard ranks users by marker count, then by
//! progress.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let api_routes = axum::Router::new()
        .route(
            "/user",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/user/:id", get(handlers::get_user))
        .route("/user/:id/markers", post(handlers::record_marker))
        .route("/marker", get(handlers::list_markers));

    axum::Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
