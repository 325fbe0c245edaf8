use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "TRAVEL_ENV";
const CONFIG_DIR_ENV: &str = "TRAVEL_CONFIG_DIR";
const ENV_PREFIX: &str = "TRAVEL";

/// Deployment environment the initializer is running in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `TRAVEL__*` variables.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration for `environment` from `config_dir`, then overlay
    /// environment variables.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed: Environment = environment.parse()?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let cfg = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // The selector variable decides, not whatever a file says.
        settings.environment = parsed;
        settings.seed.validate()?;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "DatabaseSettings::default_uri")]
    pub uri: String,
    #[serde(default = "DatabaseSettings::default_name")]
    pub name: String,
    #[serde(default = "DatabaseSettings::default_app_name")]
    pub app_name: String,
}

impl DatabaseSettings {
    fn default_uri() -> String {
        "mongodb://127.0.0.1:27017".to_string()
    }

    fn default_name() -> String {
        "travel-sample".to_string()
    }

    fn default_app_name() -> String {
        "travel-init".to_string()
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            uri: Self::default_uri(),
            name: Self::default_name(),
            app_name: Self::default_app_name(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Seed data knobs.
#[derive(Clone, Deserialize)]
pub struct SeedSettings {
    /// Plaintext for the admin account; hashed before it is stored.
    #[serde(default)]
    pub admin_password: Option<String>,
    #[serde(default = "SeedSettings::default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl SeedSettings {
    pub const MIN_BCRYPT_COST: u32 = 4;
    pub const MAX_BCRYPT_COST: u32 = 31;

    fn default_bcrypt_cost() -> u32 {
        10
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(Self::MIN_BCRYPT_COST..=Self::MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(anyhow!(
                "seed.bcrypt_cost must be between {} and {}, got {}",
                Self::MIN_BCRYPT_COST,
                Self::MAX_BCRYPT_COST,
                self.bcrypt_cost
            ));
        }
        if matches!(self.admin_password.as_deref(), Some("")) {
            return Err(anyhow!("seed.admin_password must not be empty"));
        }
        Ok(())
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            admin_password: None,
            bcrypt_cost: Self::default_bcrypt_cost(),
        }
    }
}

// Keeps the plaintext out of `{:?}` output.
impl std::fmt::Debug for SeedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedSettings")
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_database_is_travel_sample() {
        let settings = Settings::default();
        assert_eq!(settings.database.uri, "mongodb://127.0.0.1:27017");
        assert_eq!(settings.database.name, "travel-sample");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        assert!("qa".parse::<Environment>().is_err());
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn debug_output_redacts_password() {
        let seed = SeedSettings {
            admin_password: Some("hunter2".into()),
            ..SeedSettings::default()
        };
        let rendered = format!("{:?}", seed);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn bcrypt_cost_bounds_are_enforced() {
        let low = SeedSettings {
            bcrypt_cost: 3,
            ..SeedSettings::default()
        };
        assert!(low.validate().is_err());
        assert!(SeedSettings::default().validate().is_ok());
    }
}
