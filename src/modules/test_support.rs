//! Shared fixtures for module tests: a migrated in-memory store and the
//! full application router on top of it.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pawhaven_kernel::settings::Settings;
use pawhaven_kernel::{AppState, ModuleRegistry};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    super::register_all(&mut registry);
    registry
}

pub async fn migrated_pool() -> SqlitePool {
    let pool = pawhaven_db::connect_in_memory().await.unwrap();
    pawhaven_db::run_migrations(&pool, &registry().collect_migrations())
        .await
        .unwrap();
    pool
}

pub fn app(pool: SqlitePool) -> Router {
    pawhaven_http::build_router(&registry(), AppState::new(pool, Settings::default()))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}
