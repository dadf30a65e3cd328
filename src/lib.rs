pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod swagger;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use axum::Router;
use config::Config;
use db::Database;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Every route of the API with CORS and request tracing applied
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::status::router())
        .merge(routes::products::router())
        .merge(routes::appointments::router())
        .merge(swagger::create_swagger_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
