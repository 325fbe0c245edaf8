//! In-memory document store.
//!
//! Mirrors the server's strictness: creating an existing collection and
//! inserting a duplicate `_id` both fail. Like MongoDB, inserting into a
//! missing collection creates it.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::Document;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::DocumentStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    /// Snapshot of every document in a collection, in insertion order.
    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        let mut collections = self.collections.write().await;
        if collections.contains_key(name) {
            return Err(DbError::CollectionAlreadyExists {
                name: name.to_string(),
            });
        }
        collections.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), DbError> {
        let id = document
            .get_str("_id")
            .map_err(|_| DbError::MissingId {
                collection: collection.to_string(),
            })?
            .to_string();

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|d| d.get_str("_id").ok() == Some(id.as_str())) {
            return Err(DbError::DuplicateKey {
                collection: collection.to_string(),
                id,
            });
        }
        docs.push(document);
        Ok(())
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, DbError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, DbError> {
        Ok(self.collections.read().await.get(collection).and_then(|docs| {
            docs.iter()
                .find(|d| d.get_str("_id").ok() == Some(id))
                .cloned()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn create_twice_reports_existing_collection() {
        let store = MemoryStore::new("test");
        store.create_collection("hotel").await.unwrap();

        let err = store.create_collection("hotel").await.unwrap_err();
        assert!(matches!(err, DbError::CollectionAlreadyExists { name } if name == "hotel"));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = MemoryStore::new("test");
        store
            .insert_one("users", doc! { "_id": "user::a", "n": 1 })
            .await
            .unwrap();

        let err = store
            .insert_one("users", doc! { "_id": "user::a", "n": 2 })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DuplicateKey { .. }));

        let docs = store.documents("users").await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_i32("n").unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_requires_string_id() {
        let store = MemoryStore::new("test");
        let err = store
            .insert_one("users", doc! { "username": "nobody" })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::MissingId { .. }));
    }

    #[tokio::test]
    async fn missing_collection_counts_zero() {
        let store = MemoryStore::new("test");
        assert_eq!(store.count_documents("bookings").await.unwrap(), 0);
        assert!(store.find_by_id("bookings", "x").await.unwrap().is_none());
    }
}
