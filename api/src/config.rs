//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults for the detected environment
//! 2. `config/<environment>.toml` when present
//! 3. `APP__SECTION__KEY` environment variables
//! 4. `DATABASE_URL` and `JWT_SECRET` shortcuts

use config::{Config, ConfigError, File};
use std::env;

use estate_shared::config::{AppConfig, Environment};

/// Prefix of structured environment overrides, e.g. `APP__SERVER__PORT`
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

/// Load configuration for the environment named by `ENVIRONMENT`/`APP_ENV`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_for(Environment::from_env())
}

/// Load configuration for an explicit environment
pub fn load_config_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);

    let config: AppConfig = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .set_override_option("database.url", env::var("DATABASE_URL").ok())?
        .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?
        .set_override("environment", environment.to_string())?
        .build()?
        .try_deserialize()?;

    config.validate().map_err(ConfigError::Message)?;

    Ok(config)
}
