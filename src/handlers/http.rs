//! Shared state and health.

use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::auth::JwtIssuer;
use crate::db::Store;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt: JwtIssuer,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt: JwtIssuer) -> Self {
        Self { store, jwt }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
    pub fn jwt(&self) -> &JwtIssuer {
        &self.jwt
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "marker-progress" })),
    )
}
