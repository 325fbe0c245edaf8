//! Database-layer error types.

use mongodb::error::{CommandError, ErrorKind, WriteError, WriteFailure};

/// MongoDB server code for `NamespaceExists`.
pub(crate) const NAMESPACE_EXISTS: i32 = 48;
/// MongoDB server code for a unique index violation.
pub(crate) const DUPLICATE_KEY: i32 = 11000;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database unreachable: {source}")]
    Connection {
        #[source]
        source: mongodb::error::Error,
    },

    #[error("collection already exists: {name}")]
    CollectionAlreadyExists { name: String },

    #[error("duplicate key in {collection}: {id}")]
    DuplicateKey { collection: String, id: String },

    #[error("document for {collection} has no string _id")]
    MissingId { collection: String },

    #[error("failed to encode document: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl DbError {
    /// Returns true for the conditions a re-run is expected to hit.
    pub fn is_already_present(&self) -> bool {
        matches!(
            self,
            DbError::CollectionAlreadyExists { .. } | DbError::DuplicateKey { .. }
        )
    }
}

/// Extract the server error code from a driver error, if it carries one.
pub(crate) fn server_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(CommandError { code, .. }) => Some(*code),
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code, .. })) => Some(*code),
        _ => None,
    }
}
