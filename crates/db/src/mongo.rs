//! MongoDB connection management.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::error::{server_code, DbError, DUPLICATE_KEY, NAMESPACE_EXISTS};
use crate::store::DocumentStore;

/// Configuration for connecting to MongoDB.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string (e.g., `mongodb://127.0.0.1:27017`).
    pub uri: String,
    /// Database to select.
    pub database: String,
    /// Application name reported to the server.
    pub app_name: String,
}

/// A [`DocumentStore`] backed by one MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to MongoDB and select the configured database.
    ///
    /// The driver connects lazily, so a `ping` is issued to surface an
    /// unreachable server here rather than on the first write.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DbError> {
        info!(
            database = %config.database,
            app_name = %config.app_name,
            "Connecting to MongoDB"
        );

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| DbError::Connection { source })?;

        info!("Successfully connected to MongoDB");

        Ok(Self { db })
    }

    /// Returns a reference to the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn collection_names(&self) -> Result<Vec<String>, DbError> {
        Ok(self.db.list_collection_names().await?)
    }

    async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        debug!(collection = name, "createCollection");
        self.db.create_collection(name).await.map_err(|err| {
            if server_code(&err) == Some(NAMESPACE_EXISTS) {
                DbError::CollectionAlreadyExists {
                    name: name.to_string(),
                }
            } else {
                DbError::Mongo(err)
            }
        })
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), DbError> {
        let id = document
            .get_str("_id")
            .map(str::to_string)
            .unwrap_or_default();
        debug!(collection, id = %id, "insertOne");

        self.db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map(|_| ())
            .map_err(|err| {
                if server_code(&err) == Some(DUPLICATE_KEY) {
                    DbError::DuplicateKey {
                        collection: collection.to_string(),
                        id,
                    }
                } else {
                    DbError::Mongo(err)
                }
            })
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, DbError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, DbError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id })
            .await?)
    }
}
