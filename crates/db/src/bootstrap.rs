//! Create-if-absent and insert-or-skip helpers.
//!
//! These helpers make a first run and a re-run equally valid: anything the
//! database already holds is reported as [`Outcome::AlreadyPresent`] and left
//! untouched.

use mongodb::bson::{self, Document};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::DbError;
use crate::store::DocumentStore;

/// Result of one idempotent bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyPresent,
}

impl Outcome {
    pub fn is_created(self) -> bool {
        self == Outcome::Created
    }
}

/// Ensure `name` exists as a collection.
///
/// A server-side `CollectionAlreadyExists` (another initializer won the race
/// between listing and creating) counts as already present.
pub async fn ensure_collection(store: &dyn DocumentStore, name: &str) -> Result<Outcome, DbError> {
    let existing = store.collection_names().await?;
    if existing.iter().any(|c| c == name) {
        debug!(collection = name, "collection already present");
        return Ok(Outcome::AlreadyPresent);
    }

    match store.create_collection(name).await {
        Ok(()) => {
            info!(
                database = store.database_name(),
                collection = name,
                "created collection"
            );
            Ok(Outcome::Created)
        }
        Err(err) if err.is_already_present() => {
            debug!(collection = name, "collection created concurrently");
            Ok(Outcome::AlreadyPresent)
        }
        Err(err) => Err(err),
    }
}

/// Insert `document` unless a document with the same `_id` already exists.
///
/// The existing document is never modified.
pub async fn ensure_document(
    store: &dyn DocumentStore,
    collection: &str,
    document: Document,
) -> Result<Outcome, DbError> {
    let id = document
        .get_str("_id")
        .map_err(|_| DbError::MissingId {
            collection: collection.to_string(),
        })?
        .to_string();

    match store.insert_one(collection, document).await {
        Ok(()) => {
            info!(collection, id = %id, "inserted seed document");
            Ok(Outcome::Created)
        }
        Err(err) if err.is_already_present() => {
            debug!(collection, id = %id, "seed document already present");
            Ok(Outcome::AlreadyPresent)
        }
        Err(err) => Err(err),
    }
}

/// Encode `record` and insert it unless its `_id` is already taken.
pub async fn ensure_record<T: Serialize + Sync + ?Sized>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<Outcome, DbError> {
    let document = bson::to_document(record)?;
    ensure_document(store, collection, document).await
}
