//! Document store access for the travel-sample bootstrap.
//!
//! This crate provides:
//! - The [`DocumentStore`] seam the initializer writes through
//! - A MongoDB-backed store ([`MongoStore`]) and an in-memory one ([`MemoryStore`])
//! - Idempotent helpers ([`ensure_collection`], [`ensure_document`], [`ensure_record`])
//! - Error types ([`DbError`])

mod bootstrap;
mod error;
mod memory;
mod mongo;
mod store;

pub use bootstrap::{ensure_collection, ensure_document, ensure_record, Outcome};
pub use error::DbError;
pub use memory::MemoryStore;
pub use mongo::{MongoConfig, MongoStore};
pub use store::DocumentStore;

/// Re-exported so callers build documents with the same `bson` version.
pub use mongodb::bson;
