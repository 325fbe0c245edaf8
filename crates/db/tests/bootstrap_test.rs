//! Integration tests for the idempotent bootstrap helpers.

use async_trait::async_trait;
use serde::Serialize;
use travel_db::bson::{doc, Document};
use travel_db::{
    ensure_collection, ensure_document, ensure_record, DbError, DocumentStore, MemoryStore,
    Outcome,
};

#[derive(Serialize)]
struct Airline {
    #[serde(rename = "_id")]
    id: String,
    name: String,
}

#[tokio::test]
async fn ensure_collection_creates_then_skips() {
    let store = MemoryStore::new("travel-sample");

    let first = ensure_collection(&store, "airport").await.unwrap();
    let second = ensure_collection(&store, "airport").await.unwrap();

    assert_eq!(first, Outcome::Created);
    assert_eq!(second, Outcome::AlreadyPresent);
    assert_eq!(store.collection_names().await.unwrap(), vec!["airport"]);
}

#[tokio::test]
async fn ensure_document_keeps_existing_record() {
    let store = MemoryStore::new("travel-sample");
    ensure_collection(&store, "users").await.unwrap();

    let original = doc! { "_id": "user::admin", "name": "Administrator" };
    let replacement = doc! { "_id": "user::admin", "name": "Someone Else" };

    assert_eq!(
        ensure_document(&store, "users", original).await.unwrap(),
        Outcome::Created
    );
    assert_eq!(
        ensure_document(&store, "users", replacement).await.unwrap(),
        Outcome::AlreadyPresent
    );

    let stored = store
        .find_by_id("users", "user::admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("name").unwrap(), "Administrator");
    assert_eq!(store.count_documents("users").await.unwrap(), 1);
}

#[tokio::test]
async fn ensure_document_rejects_missing_id() {
    let store = MemoryStore::new("travel-sample");
    let err = ensure_document(&store, "users", doc! { "username": "admin" })
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::MissingId { .. }));
}

#[tokio::test]
async fn ensure_record_encodes_and_skips_existing() {
    let store = MemoryStore::new("travel-sample");
    let airline = Airline {
        id: "airline::10".into(),
        name: "40-Mile Air".into(),
    };

    assert_eq!(
        ensure_record(&store, "airline", &airline).await.unwrap(),
        Outcome::Created
    );
    assert_eq!(
        ensure_record(&store, "airline", &airline).await.unwrap(),
        Outcome::AlreadyPresent
    );

    let stored = store
        .find_by_id("airline", "airline::10")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("name").unwrap(), "40-Mile Air");
}

#[tokio::test]
async fn ensure_record_reports_unencodable_value() {
    let store = MemoryStore::new("travel-sample");

    let err = ensure_record(&store, "users", "not a document")
        .await
        .unwrap_err();

    assert!(matches!(err, DbError::Serialization(_)));
    assert_eq!(store.count_documents("users").await.unwrap(), 0);
}

/// A store whose listing lags behind another writer: the collection is not
/// listed yet, but the server refuses to create it.
struct LaggingStore;

#[async_trait]
impl DocumentStore for LaggingStore {
    fn database_name(&self) -> &str {
        "travel-sample"
    }

    async fn collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(Vec::new())
    }

    async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        Err(DbError::CollectionAlreadyExists {
            name: name.to_string(),
        })
    }

    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<(), DbError> {
        Ok(())
    }

    async fn count_documents(&self, _collection: &str) -> Result<u64, DbError> {
        Ok(0)
    }

    async fn find_by_id(&self, _collection: &str, _id: &str) -> Result<Option<Document>, DbError> {
        Ok(None)
    }
}

#[tokio::test]
async fn concurrent_creation_is_tolerated() {
    let outcome = ensure_collection(&LaggingStore, "bookings").await.unwrap();
    assert_eq!(outcome, Outcome::AlreadyPresent);
}
