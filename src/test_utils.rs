//! Shared helpers for driving the full router in tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use tower::util::ServiceExt;

use crate::{
    config::Config,
    db::{Database, MemoryStore},
    AppState,
};

pub fn test_config(database_url: Option<&str>, database_name: Option<&str>) -> Config {
    Config {
        database_url: database_url.map(str::to_string),
        database_name: database_name.map(str::to_string),
        server_address: "127.0.0.1:0".to_string(),
        database_timeout_seconds: 2,
    }
}

/// Router plus direct access to its backing store
pub struct TestContext {
    pub app: Router,
    pub state: Arc<AppState>,
    pub store: Option<Arc<MemoryStore>>,
}

impl TestContext {
    /// App backed by an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new("test"));
        let state = Arc::new(AppState {
            db: Database::from_store(store.clone()),
            config: test_config(Some(crate::db::MEMORY_URL), Some("test")),
        });
        Self {
            app: crate::create_app(state.clone()),
            state,
            store: Some(store),
        }
    }

    /// App started without any store configuration
    pub fn unavailable() -> Self {
        let state = Arc::new(AppState {
            db: Database::unavailable("DATABASE_URL not set"),
            config: test_config(None, None),
        });
        Self {
            app: crate::create_app(state.clone()),
            state,
            store: None,
        }
    }

    /// App using whatever store `config` resolves to
    pub async fn from_config(config: Config) -> Self {
        let state = Arc::new(AppState {
            db: Database::connect(&config).await,
            config,
        });
        Self {
            app: crate::create_app(state.clone()),
            state,
            store: None,
        }
    }

    pub async fn stored_count(&self, collection: &str) -> usize {
        match &self.store {
            Some(store) => store.count(collection).await,
            None => 0,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(b) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(b)
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a throwaway MongoDB container and return it with its connection string
pub async fn start_mongo() -> (ContainerAsync<Mongo>, String) {
    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start mongo container");
    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get mongo port");
    (container, format!("mongodb://localhost:{}", port))
}
