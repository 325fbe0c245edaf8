pub mod models;
pub mod password;

use async_trait::async_trait;
use travel_db::{ensure_record, DocumentStore, Outcome};
use travel_kernel::{InitCtx, Module, SeedRecord};

use models::User;

pub const COLLECTION: &str = "users";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_NAME: &str = "Administrator";

/// Owns the `users` collection and seeds the administrator account
pub struct UsersModule;

impl UsersModule {
    pub const fn new() -> Self {
        Self
    }
}

/// Whether the admin account is already stored; nothing is written then.
async fn admin_exists(store: &dyn DocumentStore) -> anyhow::Result<bool> {
    let id = User::id_for(ADMIN_USERNAME);
    Ok(store.find_by_id(COLLECTION, &id).await?.is_some())
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    fn collections(&self) -> &'static [&'static str] {
        &[COLLECTION]
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if admin_exists(ctx.store).await? {
            return Ok(());
        }
        password::check_credential_policy(ctx.settings.environment, &ctx.settings.seed)
    }

    async fn seed(&self, ctx: &InitCtx<'_>) -> anyhow::Result<Vec<SeedRecord>> {
        if admin_exists(ctx.store).await? {
            tracing::debug!(module = self.name(), "admin user already present");
            return Ok(vec![SeedRecord {
                collection: COLLECTION,
                id: User::id_for(ADMIN_USERNAME),
                outcome: Outcome::AlreadyPresent,
            }]);
        }

        let hash = password::admin_password_hash(ctx.settings.environment, &ctx.settings.seed)?;
        let admin = User::new(ADMIN_USERNAME, ADMIN_NAME, hash)?;

        let outcome = ensure_record(ctx.store, COLLECTION, &admin).await?;

        tracing::info!(
            module = self.name(),
            id = %admin.id,
            outcome = ?outcome,
            "admin user seeded"
        );

        Ok(vec![SeedRecord {
            collection: COLLECTION,
            id: admin.id,
            outcome,
        }])
    }
}

pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(UsersModule::new())
}
