use async_trait::async_trait;
use travel_db::{DocumentStore, Outcome};

/// Context provided to modules during the bootstrap pass
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub store: &'a dyn DocumentStore,
}

/// What happened to one seed document, keyed by `_id` in `collection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    pub collection: &'static str,
    pub id: String,
    pub outcome: Outcome,
}

/// A unit that owns collections and, optionally, their seed data
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Collections this module owns, created in the order returned
    fn collections(&self) -> &'static [&'static str] {
        &[]
    }

    /// Validate configuration before anything is written
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Insert seed documents
    /// Called after every module's collections exist
    async fn seed(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<Vec<SeedRecord>> {
        Ok(vec![])
    }
}
