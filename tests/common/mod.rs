use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use marker_progress::auth::JwtIssuer;
use marker_progress::config::TokenSettings;
use marker_progress::db::Store;
use marker_progress::{create_app, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

#[allow(dead_code)]
pub fn test_jwt() -> JwtIssuer {
    JwtIssuer::new(TokenSettings {
        key: "test-jwt-secret-min-32-chars!!!!".to_string(),
        issuer: "test-issuer".to_string(),
        audience: "test-audience".to_string(),
        ttl_days: 2,
    })
}

#[allow(dead_code)]
pub fn test_app(store: Arc<dyn Store>) -> axum::Router {
    create_app(AppState::new(store, test_jwt()))
}

/// Send a request and decode the JSON body (Null when empty).
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {}", t));
    }
    let req = match body {
        Some(b) => req
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let res: Response<Body> = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Register a user; returns (id, token).
#[allow(dead_code)]
pub async fn register(app: &axum::Router, first: &str, last: &str, email: &str) -> (i64, String) {
    let (status, json) = send(
        app,
        "POST",
        "/api/user",
        None,
        Some(serde_json::json!({ "firstname": first, "lastName": last, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", json);
    let id = json["id"].as_i64().expect("id");
    let token = json["token"].as_str().expect("token").to_string();
    (id, token)
}
