use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

pub const APPLICATION_NAME: &str = "user-api";

#[derive(Serialize)]
struct HelloResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    application: &'static str,
    version: &'static str,
    /// Milliseconds since the Unix epoch.
    timestamp: i64,
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the User API!",
        status: "success",
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        application: APPLICATION_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().timestamp_millis(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/hello/health", get(health))
}
