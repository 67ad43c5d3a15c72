//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate.
//! Each sub-module represents a logical configuration section.

pub mod criteria;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::criteria::CriteriaConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "CRITERIA";

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (default.toml + environment overlay + `CRITERIA__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Criteria-set defaults.
    #[serde(default)]
    pub criteria: CriteriaConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default` with an environment-specific overlay and
    /// environment variables prefixed with `CRITERIA`. Missing files are
    /// not an error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        Self::finish(builder, env)
    }

    /// Load configuration from a single file plus environment variables.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let builder = config::Config::builder().add_source(config::File::from(path).required(true));

        Self::finish(builder, &path.display().to_string())
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        origin: &str,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(origin, level = %loaded.logging.level, "Loaded configuration");
        Ok(loaded)
    }
}
