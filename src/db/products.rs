use bson::{doc, Document};

use super::{normalize_document, Database};
use crate::errors::StoreError;
use crate::models::{Product, ProductListing, ProductQuery, PRODUCT_COLLECTION};

impl Database {
    pub async fn create_product(&self, product: &Product) -> Result<String, StoreError> {
        self.insert(PRODUCT_COLLECTION, product).await
    }

    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<ProductListing>, StoreError> {
        let filter = match query.category {
            Some(category) => doc! { "category": category.as_str() },
            None => Document::new(),
        };

        let documents = self.find(PRODUCT_COLLECTION, filter, query.limit).await?;

        Ok(documents
            .into_iter()
            .filter_map(|document| {
                match bson::from_document::<ProductListing>(normalize_document(document)) {
                    Ok(listing) => Some(listing),
                    Err(e) => {
                        tracing::warn!("Skipping malformed product document: {}", e);
                        None
                    }
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::ProductCategory;
    use std::sync::Arc;

    fn product(title: &str, category: ProductCategory) -> Product {
        Product {
            title: title.to_string(),
            description: None,
            category,
            price: None,
            condition: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let db = Database::from_store(Arc::new(MemoryStore::new("test")));
        db.create_product(&product("Tractor X", ProductCategory::Landbouw)).await.unwrap();
        db.create_product(&product("Golf", ProductCategory::Auto)).await.unwrap();

        let listings = db
            .list_products(&ProductQuery {
                category: Some(ProductCategory::Landbouw),
                limit: 12,
            })
            .await
            .unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Tractor X");
        assert!(listings[0].created_at.is_some());

        let all = db
            .list_products(&ProductQuery { category: None, limit: 12 })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_documents_are_skipped() {
        let store = Arc::new(MemoryStore::new("test"));
        let db = Database::from_store(store);
        db.insert(PRODUCT_COLLECTION, &doc! { "description": "no title" })
            .await
            .unwrap();
        db.create_product(&product("Aanhanger", ProductCategory::Diversen))
            .await
            .unwrap();

        let listings = db
            .list_products(&ProductQuery { category: None, limit: 12 })
            .await
            .unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Aanhanger");
    }
}
