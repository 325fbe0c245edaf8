//! travel-init
//!
//! One-shot bootstrap for the `travel-sample` document database: creates the
//! `users`, `hotel`, `airport`, `flightpath` and `bookings` collections and
//! seeds the administrator account. Safe to re-run.

pub mod modules;

use travel_db::DocumentStore;
use travel_kernel::settings::Settings;
use travel_kernel::{BootstrapReport, InitCtx, ModuleRegistry};

/// Line printed to stdout once the database is ready.
pub fn completion_message(database: &str) -> String {
    format!("{database} collections and seed user are ready")
}

/// Registry holding every module in bootstrap order.
pub fn registry() -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry)?;
    Ok(registry)
}

/// Run one bootstrap pass against `store`.
pub async fn run(settings: &Settings, store: &dyn DocumentStore) -> anyhow::Result<BootstrapReport> {
    let registry = registry()?;
    let ctx = InitCtx { settings, store };

    let report = registry.bootstrap(&ctx).await?;

    tracing::info!(
        database = store.database_name(),
        collections_created = report.collections_created(),
        collections_present = report.collections_present(),
        documents_inserted = report.documents_inserted(),
        documents_present = report.documents_present(),
        "bootstrap complete"
    );

    Ok(report)
}
