use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::DbError;

/// The handful of requests the bootstrap issues against a document database.
///
/// Implementations report `CollectionAlreadyExists` and `DuplicateKey` as
/// typed errors instead of swallowing them; tolerating those is the job of
/// [`crate::ensure_collection`] and [`crate::ensure_document`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the selected database.
    fn database_name(&self) -> &str;

    /// Names of the collections that currently exist.
    async fn collection_names(&self) -> Result<Vec<String>, DbError>;

    /// Create an empty collection. Fails with `CollectionAlreadyExists` if present.
    async fn create_collection(&self, name: &str) -> Result<(), DbError>;

    /// Insert one document. Fails with `DuplicateKey` on an `_id` collision.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), DbError>;

    /// Number of documents in a collection; zero when the collection is absent.
    async fn count_documents(&self, collection: &str) -> Result<u64, DbError>;

    /// Look a document up by its string `_id`.
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, DbError>;
}
