use anyhow::Context;
use travel_db::{MongoConfig, MongoStore};
use travel_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load travel-init settings")?;
    travel_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        database = %settings.database.name,
        "travel-init starting"
    );

    let store = MongoStore::connect(&MongoConfig {
        uri: settings.database.uri.clone(),
        database: settings.database.name.clone(),
        app_name: settings.database.app_name.clone(),
    })
    .await
    .with_context(|| "failed to connect to MongoDB")?;

    travel_init::run(&settings, &store).await?;

    println!("{}", travel_init::completion_message(&settings.database.name));
    Ok(())
}
