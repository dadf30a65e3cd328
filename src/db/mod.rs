use async_trait::async_trait;
use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::errors::{truncate_message, StoreError};

pub mod appointments;
pub mod memory;
pub mod mongo;
pub mod products;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// `DATABASE_URL` value that selects the in-process backend
pub const MEMORY_URL: &str = "memory://";
pub const DEFAULT_MEMORY_DATABASE_NAME: &str = "vanbladel";
/// Most collection names reported by a health check
pub const MAX_HEALTH_COLLECTIONS: usize = 10;

/// Minimal document database surface the API needs.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn database_name(&self) -> &str;

    /// Append a document and return the generated identifier
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Up to `limit` documents whose fields equal every pair in `filter`
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreHealth {
    pub connected: bool,
    pub reachable: bool,
    pub database_name: Option<String>,
    pub collections: Vec<String>,
    pub error: Option<String>,
}

/// Shared handle to the document store. Without a live connection every
/// operation fails with `StoreError::Unavailable`.
#[derive(Clone)]
pub struct Database {
    store: Option<Arc<dyn DocumentStore>>,
    unavailable_reason: Arc<str>,
}

impl Database {
    /// Build the store from configuration. Never fails: missing settings or a
    /// bad connection string leave the handle unavailable.
    pub async fn connect(config: &Config) -> Self {
        let Some(url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, document store disabled");
            return Self::unavailable("DATABASE_URL not set");
        };

        if url == MEMORY_URL {
            let name = config
                .database_name
                .as_deref()
                .unwrap_or(DEFAULT_MEMORY_DATABASE_NAME);
            tracing::info!("Using in-memory document store '{}'", name);
            return Self::from_store(Arc::new(MemoryStore::new(name)));
        }

        let Some(name) = config.database_name.as_deref() else {
            tracing::warn!("DATABASE_NAME not set, document store disabled");
            return Self::unavailable("DATABASE_NAME not set");
        };

        let timeout = Duration::from_secs(config.database_timeout_seconds);
        match MongoStore::connect(url, name, timeout).await {
            Ok(store) => {
                tracing::info!("Document store configured for database '{}'", name);
                Self::from_store(Arc::new(store))
            }
            Err(e) => {
                tracing::error!("Failed to initialize document store: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            unavailable_reason: Arc::from(""),
        }
    }

    pub fn unavailable<S: AsRef<str>>(reason: S) -> Self {
        Self {
            store: None,
            unavailable_reason: Arc::from(reason.as_ref()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, StoreError> {
        self.store
            .as_ref()
            .ok_or_else(|| StoreError::unavailable(self.unavailable_reason.as_ref()))
    }

    /// Serialize `value`, stamp `created_at`/`updated_at` and insert it
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        value: &T,
    ) -> Result<String, StoreError> {
        let store = self.store()?;
        let mut document =
            bson::to_document(value).map_err(|e| StoreError::encode(collection, e))?;
        let now = bson::DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let id = store.insert(collection, document).await?;
        tracing::debug!("Inserted document {} into '{}'", id, collection);
        Ok(id)
    }

    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError> {
        let store = self.store()?;
        if limit == 0 {
            return Ok(Vec::new());
        }
        store.find(collection, filter, limit).await
    }

    /// Connection diagnostics; failures are reported in the result, never raised
    pub async fn health(&self) -> StoreHealth {
        let Some(store) = self.store.as_ref() else {
            return StoreHealth {
                error: Some(self.unavailable_reason.to_string()),
                ..StoreHealth::default()
            };
        };

        let mut health = StoreHealth {
            connected: true,
            database_name: Some(store.database_name().to_string()),
            ..StoreHealth::default()
        };

        match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_HEALTH_COLLECTIONS);
                health.reachable = true;
                health.collections = names;
            }
            Err(e) => {
                tracing::warn!("Document store health check failed: {}", e);
                health.error = Some(e.to_string());
            }
        }

        health
    }
}

/// Strip the internal `_id` and render top-level datetimes as RFC 3339 text
pub fn normalize_document(mut document: Document) -> Document {
    document.remove("_id");
    for (_, value) in document.iter_mut() {
        if let Bson::DateTime(dt) = value {
            *value = Bson::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true));
        }
    }
    document
}

/// Shorten an underlying error for status text
pub(crate) fn short_error(message: &str) -> String {
    truncate_message(message, 50)
}
