use async_trait::async_trait;
use bson::{Bson, Document};
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;

use super::DocumentStore;
use crate::errors::StoreError;

const APP_NAME: &str = "vanbladel";

/// MongoDB backed document store
pub struct MongoStore {
    name: String,
    database: mongodb::Database,
}

impl MongoStore {
    /// Parse the connection string and build a client. The driver connects
    /// lazily, so an unreachable server only shows up on the first operation.
    pub async fn connect(url: &str, name: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| StoreError::unavailable(format!("Invalid DATABASE_URL: {}", e)))?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)
            .map_err(|e| StoreError::unavailable(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            name: name.to_string(),
            database: client.database(name),
        })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::write(collection, e))?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError> {
        // MongoDB treats a zero limit as "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection(collection)
            .find(filter)
            .limit(i64::from(limit))
            .await
            .map_err(|e| StoreError::read(collection, e))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::read(collection, e))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| StoreError::read("*", e))
    }
}
