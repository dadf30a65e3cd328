use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;
use std::sync::Arc;

use crate::{
    config::Config,
    db::{short_error, StoreHealth},
    models::{DiagnosticsResponse, MessageResponse},
    AppState,
};

pub const ROOT_MESSAGE: &str = "V.O.F. Van Bladel backend running";
pub const HELLO_MESSAGE: &str = "Welkom bij V.O.F. Van Bladel API";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/api/health", get(health_check))
        .route("/test", get(test_database))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Backend is running", body = MessageResponse))
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "status",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "status",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Check whether the document store is configured and reachable
#[utoipa::path(
    get,
    path = "/test",
    tag = "status",
    responses(
        (status = 200, description = "Diagnostics, always returned", body = DiagnosticsResponse)
    )
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let health = state.db.health().await;
    Json(diagnostics(&state.config, &health))
}

fn set_flag(is_set: bool) -> String {
    let flag = if is_set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

pub fn diagnostics(config: &Config, health: &StoreHealth) -> DiagnosticsResponse {
    let (database, connection_status) = if !health.connected {
        ("⚠️  Available but not initialized".to_string(), "Not Connected")
    } else if health.reachable {
        ("✅ Connected & Working".to_string(), "Connected")
    } else {
        let error = health.error.as_deref().unwrap_or("unknown error");
        (
            format!("⚠️  Connected but Error: {}", short_error(error)),
            "Connected",
        )
    };

    DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_flag(config.database_url_is_set()),
        database_name: set_flag(config.database_name_is_set()),
        connection_status: connection_status.to_string(),
        collections: health.collections.clone(),
    }
}
