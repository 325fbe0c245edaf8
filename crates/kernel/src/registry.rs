use anyhow::{anyhow, Context};
use std::sync::Arc;
use travel_db::{ensure_collection, Outcome};

use crate::module::{InitCtx, Module, SeedRecord};

/// What a bootstrap pass did, step by step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub collections: Vec<(&'static str, Outcome)>,
    pub seeds: Vec<SeedRecord>,
}

impl BootstrapReport {
    pub fn collections_created(&self) -> usize {
        self.collections.iter().filter(|(_, o)| o.is_created()).count()
    }

    pub fn collections_present(&self) -> usize {
        self.collections.len() - self.collections_created()
    }

    pub fn documents_inserted(&self) -> usize {
        self.seeds.iter().filter(|s| s.outcome.is_created()).count()
    }

    pub fn documents_present(&self) -> usize {
        self.seeds.len() - self.documents_inserted()
    }

    /// True when the pass found everything already in place
    pub fn is_noop(&self) -> bool {
        self.collections_created() == 0 && self.documents_inserted() == 0
    }
}

/// Module registry; registration order is bootstrap order
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module
    ///
    /// Fails if the name or any of its collections is already claimed.
    pub fn register(&mut self, module: Arc<dyn Module>) -> anyhow::Result<()> {
        if self.get_module(module.name()).is_some() {
            return Err(anyhow!("module '{}' registered twice", module.name()));
        }
        for collection in module.collections() {
            if let Some(owner) = self
                .modules
                .iter()
                .find(|m| m.collections().contains(collection))
            {
                return Err(anyhow!(
                    "collection '{}' of module '{}' is already owned by '{}'",
                    collection,
                    module.name(),
                    owner.name()
                ));
            }
        }
        self.modules.push(module);
        Ok(())
    }

    /// Get all registered modules
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Every owned collection, in creation order
    pub fn collections(&self) -> Vec<&'static str> {
        self.modules
            .iter()
            .flat_map(|m| m.collections().iter().copied())
            .collect()
    }

    /// Initialize every module, ensure every collection exists, then run
    /// every module's seed step
    pub async fn bootstrap(&self, ctx: &InitCtx<'_>) -> anyhow::Result<BootstrapReport> {
        tracing::info!(
            database = ctx.store.database_name(),
            modules = self.modules.len(),
            "bootstrapping"
        );

        for module in &self.modules {
            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        let mut report = BootstrapReport::default();

        for module in &self.modules {
            for &collection in module.collections() {
                let outcome = ensure_collection(ctx.store, collection)
                    .await
                    .with_context(|| {
                        format!(
                            "failed to create collection '{}' for module '{}'",
                            collection,
                            module.name()
                        )
                    })?;
                report.collections.push((collection, outcome));
            }
        }

        for module in &self.modules {
            tracing::info!(module = module.name(), "seeding module");

            let seeds = module
                .seed(ctx)
                .await
                .with_context(|| format!("failed to seed module '{}'", module.name()))?;
            report.seeds.extend(seeds);
        }

        Ok(report)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
